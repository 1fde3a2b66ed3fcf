use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use nocc::{
    diagnostics::diagnostics::{Diagnostic, DiagnosticSink, Severity, TerminalEmitter},
    lexer::lexer::tokenize_with_diagnostics,
    parser::parser::parse_with_diagnostics,
    printer::{render_ast, render_tokens},
};

#[derive(Parser)]
#[command(name = "nocc")]
#[command(about = "Tokenize and parse a nocc source file", version)]
struct Cli {
    /// Source file
    input: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree
    #[arg(long)]
    ast: bool,

    /// Show debug diagnostics (sizes, counts, timings)
    #[arg(short, long)]
    debug: bool,

    /// When to colour diagnostics
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read `{}`: {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let file_name = cli.input.display().to_string();

    let min_severity = if cli.debug {
        Severity::Debug
    } else {
        Severity::Note
    };
    let mut emitter = TerminalEmitter::stderr(file_name.clone(), source.as_str(), cli.color.into())
        .with_min_severity(min_severity);

    emitter.report(Diagnostic::debug(format!(
        "read {} bytes from `{}`",
        source.len(),
        file_name
    )));

    let start = Instant::now();
    let tokens = tokenize_with_diagnostics(&source, &mut emitter);
    emitter.report(Diagnostic::debug(format!("tokenized in {:?}", start.elapsed())));

    if cli.tokens {
        print!("{}", render_tokens(&tokens));
    }

    let parse_start = Instant::now();
    let ast = match parse_with_diagnostics(&tokens, &mut emitter) {
        Ok(ast) => ast,
        Err(err) => {
            emitter.report(err.to_diagnostic());
            return ExitCode::FAILURE;
        }
    };
    emitter.report(Diagnostic::debug(format!(
        "parsed {} statements in {:?}",
        ast.len(),
        parse_start.elapsed()
    )));

    if cli.ast {
        print!("{}", render_ast(&ast));
    }

    ExitCode::SUCCESS
}
