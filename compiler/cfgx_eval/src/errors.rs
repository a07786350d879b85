//! Evaluation errors and their factory functions.
//!
//! Every error aborts the current top-level evaluation. Factories are
//! `#[cold]` so the happy path stays compact.

use crate::Value;

/// Result of evaluating one node.
pub type EvalResult<'a> = Result<Value<'a>, EvalError>;

/// Why an evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A syntax form outside the declarative sub-language.
    #[error("unsupported {kind}: `{text}`{}", within(.parent.as_deref()))]
    UnsupportedConstruct {
        kind: &'static str,
        text: String,
        parent: Option<String>,
    },

    #[error("cannot resolve identifier `{name}`")]
    UnresolvedIdentifier { name: String },

    /// A callable member that is not on the method allow-list.
    #[error("method `{name}` is not allowed on {target} values")]
    UnsupportedMethod { name: String, target: &'static str },

    #[error("unsupported operator `{op}`")]
    UnsupportedOperator { op: &'static str },

    #[error("expected exactly {expected} statement(s), found {found}")]
    ArityError { expected: usize, found: usize },

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("evaluation exceeded the maximum depth of {limit}")]
    RecursionLimit { limit: usize },
}

fn within(parent: Option<&str>) -> String {
    parent.map_or_else(String::new, |parent| format!(" in `{parent}`"))
}

// Factories

#[cold]
pub fn unsupported_construct(kind: &'static str, text: String, parent: Option<String>) -> EvalError {
    EvalError::UnsupportedConstruct { kind, text, parent }
}

#[cold]
pub fn unresolved_identifier(name: &str) -> EvalError {
    EvalError::UnresolvedIdentifier {
        name: name.to_string(),
    }
}

#[cold]
pub fn unsupported_method(name: &str, target: &'static str) -> EvalError {
    EvalError::UnsupportedMethod {
        name: name.to_string(),
        target,
    }
}

#[cold]
pub fn unsupported_operator(op: &'static str) -> EvalError {
    EvalError::UnsupportedOperator { op }
}

/// A clause or declaration list that must hold exactly one entry.
#[cold]
pub fn arity_error(found: usize) -> EvalError {
    EvalError::ArityError { expected: 1, found }
}

#[cold]
pub fn type_mismatch(expected: &'static str, found: &Value<'_>) -> EvalError {
    EvalError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

#[cold]
pub fn not_callable(found: &Value<'_>) -> EvalError {
    type_mismatch("function", found)
}

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::RecursionLimit { limit }
}
