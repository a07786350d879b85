//! Driver errors.

use std::io;
use std::path::PathBuf;

use cfgx_eval::{EvalError, Value};
use cfgx_syntax::SyntaxError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading, parsing, or locating the declaration failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The value evaluated fine but is not what the consumer expects.
    #[error("expected {expected}, found {found}")]
    Shape { expected: &'static str, found: String },

    /// The value does not deserialize into the requested type.
    #[error("cannot convert value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cold]
pub(crate) fn shape_error(expected: &'static str, found: &Value<'_>) -> Error {
    Error::Shape {
        expected,
        found: found.type_name().to_string(),
    }
}
