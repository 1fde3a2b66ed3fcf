/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr`/`Stmt` sum types and the `Ast` root
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
/// - visit: Read-only traversal of a finished tree
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod visit;
