//! Runtime values produced by evaluation.
//!
//! Data values (`Undefined` through `Record`) own their contents and never
//! refer back to the source tree. Closures borrow their body from the parsed
//! module, which is why `Value` carries the AST lifetime `'a`.
//!
//! Heap payloads are reference counted and never mutated after construction,
//! so cloning a value is cheap.

mod json;
mod number;
mod record;

use std::fmt;
use std::rc::Rc;

use cfgx_syntax::ast::BlockStmtOrExpr;
use cfgx_syntax::Span;
use smallvec::SmallVec;

use crate::methods::Method;
use crate::Context;

pub use number::{format_number, to_int32};
pub use record::Record;

/// The dynamic result of evaluating a node.
#[derive(Clone)]
pub enum Value<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    List(Rc<Vec<Value<'a>>>),
    Record(Rc<Record<'a>>),
    /// An arrow function together with the context it was created in.
    Closure(Rc<Closure<'a>>),
    /// An allow-listed method bound to its receiver.
    Method(Rc<BoundMethod<'a>>),
}

/// Arrow-function value.
pub struct Closure<'a> {
    pub params: SmallVec<[Rc<str>; 4]>,
    pub body: &'a BlockStmtOrExpr,
    /// Context in effect where the arrow function was evaluated.
    pub env: Context<'a>,
    pub span: Span,
}

pub struct BoundMethod<'a> {
    pub receiver: Value<'a>,
    pub method: Method,
}

impl<'a> Value<'a> {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(items: Vec<Value<'a>>) -> Self {
        Value::List(Rc::new(items))
    }

    pub fn record(record: Record<'a>) -> Self {
        Value::Record(Rc::new(record))
    }

    pub fn bound(receiver: Value<'a>, method: Method) -> Self {
        Value::Method(Rc::new(BoundMethod { receiver, method }))
    }

    /// Name of the value's runtime type, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Closure(_) | Value::Method(_) => "function",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Method(_))
    }

    /// JavaScript truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Record(_) | Value::Closure(_) | Value::Method(_) => true,
        }
    }

    /// String form as produced by JavaScript's `String(value)`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Str(s) => s.to_string(),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Record(_) => "[object Object]".to_string(),
            Value::Closure(_) => "[Function]".to_string(),
            Value::Method(bound) => format!("[Function: {}]", bound.method.name()),
        }
    }

    /// Numeric conversion as performed by unary `+`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => number::parse_number(s),
            Value::List(_) => number::parse_number(&self.to_display_string()),
            Value::Undefined | Value::Record(_) | Value::Closure(_) | Value::Method(_) => f64::NAN,
        }
    }
}

/// Strict equality (`===`).
///
/// Primitives compare by value with IEEE semantics, so `NaN` is unequal to
/// itself. Lists and records compare structurally; record key order is
/// irrelevant. Callables compare by identity.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b) || a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Record(record) => f
                .debug_map()
                .entries(record.iter().map(|(key, value)| (key, value)))
                .finish(),
            Value::Closure(closure) => write!(f, "<closure ({})>", closure.params.join(", ")),
            Value::Method(bound) => write!(f, "<method {}>", bound.method.name()),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value<'_> {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
