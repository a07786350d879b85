//! cfgx Syntax - TypeScript parsing service for static configuration extraction.
//!
//! This crate owns everything the evaluator treats as an external collaborator:
//!
//! - [`parse_source`]: parses one file with the swc TypeScript parser
//! - [`Project`]: an entry file plus every file reachable through relative
//!   imports, all sharing one `SourceMap`
//! - [`DefinitionResolver`]: maps an identifier occurrence to its declaring
//!   [`Node`]s, following `import`/`export` edges across files
//! - [`find_declaration`]: the entry-point locator
//!
//! # Borrowing
//!
//! Nodes are `Copy` views into the swc AST held by a [`Project`]. Anything the
//! evaluator builds from them borrows the project for `'a`.

mod errors;
mod locate;
mod node;
mod parse;
mod paths;
mod project;
mod resolve;

pub use errors::SyntaxError;
pub use locate::find_declaration;
pub use node::{expr_kind, stmt_kind, Node};
pub use parse::{parse_source, ParsedSource, MAX_NESTING};
pub use project::{FsLoader, MemoryLoader, Project, SourceLoader, SourceUnit};
pub use resolve::{DefinitionResolver, NoDefinitions, ProjectResolver};

// Re-export the AST so downstream crates match on the same types.
pub use swc_common::{BytePos, Span, Spanned};
pub use swc_ecma_ast as ast;
