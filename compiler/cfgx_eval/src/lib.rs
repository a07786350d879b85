//! cfgx Eval - static evaluator for declarative TypeScript configuration.
//!
//! Computes the value of configuration expressions without executing the
//! program. Only a side-effect-free sub-language is understood: literals,
//! arrays and objects with spread, identifiers, member access, calls of
//! arrow functions and allow-listed methods, ternaries, `===`, `||`, prefix
//! unary operators, template strings and `switch`.
//!
//! # Architecture
//!
//! - `Evaluator`: recursive driver with exhaustive dispatch over syntax kinds
//! - `Context`: persistent scope chain captured by closures
//! - `allowed_method`: the method allow-list, one match on (type, name)
//! - `evaluate_unary` / `classify_binary`: operator semantics
//! - `Value::to_json`: conversion for consumers
//!
//! Identifiers not bound in the context are looked up through a
//! [`cfgx_syntax::DefinitionResolver`], which may point into other files.

mod context;
pub mod errors;
mod interpreter;
mod methods;
mod operators;
mod stack;
mod unary_operators;
mod value;

pub use context::Context;
pub use errors::{EvalError, EvalResult};
pub use interpreter::{Evaluator, EvaluatorBuilder, DEFAULT_MAX_DEPTH};
pub use methods::{allowed_method, Method, ALLOWED_METHODS};
pub use operators::{classify_binary, strict_equals, BinaryKind};
pub use unary_operators::evaluate_unary;
pub use value::{format_number, BoundMethod, Closure, Record, Value};

#[cfg(test)]
mod tests;
