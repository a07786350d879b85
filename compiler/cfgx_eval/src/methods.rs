//! The method allow-list.
//!
//! Evaluated code can reach exactly the methods listed here; every other
//! callable member is rejected with `UnsupportedMethod`. All listed methods
//! are pure and total. This module is the single place to audit when the
//! sub-language grows.

use crate::errors::{unsupported_method, EvalResult};
use crate::Value;

/// Allow-listed methods, by receiver type.
pub const ALLOWED_METHODS: &[(&str, &[&str])] = &[
    ("list", &["map", "flatMap", "includes", "some", "find", "filter"]),
    ("string", &["slice", "toUpperCase", "toLowerCase"]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Map,
    FlatMap,
    Includes,
    Some,
    Find,
    Filter,
    Slice,
    ToUpperCase,
    ToLowerCase,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Map => "map",
            Method::FlatMap => "flatMap",
            Method::Includes => "includes",
            Method::Some => "some",
            Method::Find => "find",
            Method::Filter => "filter",
            Method::Slice => "slice",
            Method::ToUpperCase => "toUpperCase",
            Method::ToLowerCase => "toLowerCase",
        }
    }
}

/// Look up `name` on the allow-list for the receiver's type.
pub fn allowed_method(receiver: &Value<'_>, name: &str) -> Option<Method> {
    let method = match (receiver, name) {
        (Value::List(_), "map") => Method::Map,
        (Value::List(_), "flatMap") => Method::FlatMap,
        (Value::List(_), "includes") => Method::Includes,
        (Value::List(_), "some") => Method::Some,
        (Value::List(_), "find") => Method::Find,
        (Value::List(_), "filter") => Method::Filter,
        (Value::Str(_), "slice") => Method::Slice,
        (Value::Str(_), "toUpperCase") => Method::ToUpperCase,
        (Value::Str(_), "toLowerCase") => Method::ToLowerCase,
        _ => return None,
    };
    Some(method)
}

// Members every object inherits.
const OBJECT_PROTOTYPE: &[&str] = &[
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toLocaleString",
    "toString",
    "valueOf",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
];

const LIST_PROTOTYPE: &[&str] = &[
    "at", "concat", "copyWithin", "entries", "every", "fill", "findIndex", "findLast",
    "findLastIndex", "flat", "forEach", "indexOf", "join", "keys", "lastIndexOf", "pop", "push",
    "reduce", "reduceRight", "reverse", "shift", "slice", "sort", "splice", "toReversed",
    "toSorted", "toSpliced", "unshift", "values", "with",
];

const STRING_PROTOTYPE: &[&str] = &[
    "at", "charAt", "charCodeAt", "codePointAt", "concat", "endsWith", "includes", "indexOf",
    "lastIndexOf", "localeCompare", "match", "matchAll", "normalize", "padEnd", "padStart",
    "repeat", "replace", "replaceAll", "search", "split", "startsWith", "substring", "substr",
    "toLocaleLowerCase", "toLocaleUpperCase", "trim", "trimEnd", "trimStart",
];

const NUMBER_PROTOTYPE: &[&str] = &["toExponential", "toFixed", "toPrecision"];

const FUNCTION_PROTOTYPE: &[&str] = &["apply", "bind", "call"];

/// Whether `name` is a built-in callable member of the receiver's type.
///
/// Such members exist at runtime, so reading them is an attempt to call
/// something outside the allow-list rather than a missing field.
pub fn is_builtin_callable(receiver: &Value<'_>, name: &str) -> bool {
    let own: &[&str] = match receiver {
        Value::List(_) => LIST_PROTOTYPE,
        Value::Str(_) => STRING_PROTOTYPE,
        Value::Number(_) => NUMBER_PROTOTYPE,
        Value::Closure(_) | Value::Method(_) => FUNCTION_PROTOTYPE,
        _ => &[],
    };
    own.contains(&name) || OBJECT_PROTOTYPE.contains(&name)
}

/// String methods need no callbacks and are dispatched here.
pub(crate) fn dispatch_string_method<'a>(
    receiver: &str,
    method: Method,
    args: &[Value<'a>],
) -> EvalResult<'a> {
    match method {
        Method::ToUpperCase => Ok(Value::string(&receiver.to_uppercase())),
        Method::ToLowerCase => Ok(Value::string(&receiver.to_lowercase())),
        Method::Slice => {
            let chars: Vec<char> = receiver.chars().collect();
            let len = chars.len();
            let start = relative_index(args.first(), len, 0);
            let end = relative_index(args.get(1), len, len);
            let sliced: String = if start < end {
                chars[start..end].iter().collect()
            } else {
                String::new()
            };
            Ok(Value::string(&sliced))
        }
        other => Err(unsupported_method(other.name(), "string")),
    }
}

/// Resolve a `slice` bound: negative values count from the end, the result
/// is clamped to `0..=len`, and a missing bound takes `default`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "clamped to 0..=len before conversion"
)]
fn relative_index(arg: Option<&Value<'_>>, len: usize, default: usize) -> usize {
    let n = match arg {
        None | Some(Value::Undefined) => return default,
        Some(value) => value.to_number(),
    };
    if n.is_nan() {
        return 0;
    }
    let len_f = len as f64;
    let n = n.trunc();
    let resolved = if n < 0.0 { (len_f + n).max(0.0) } else { n.min(len_f) };
    resolved as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_matches_dispatch() {
        let samples = [("list", Value::list(Vec::new())), ("string", Value::string("s"))];
        for (target, receiver) in &samples {
            let names = ALLOWED_METHODS
                .iter()
                .find(|(ty, _)| ty == target)
                .map(|(_, names)| *names)
                .unwrap_or_default();
            for name in names {
                let method = allowed_method(receiver, name);
                assert_eq!(method.map(Method::name), Some(*name));
            }
        }
    }

    #[test]
    fn mutating_members_are_not_allowed() {
        let list = Value::list(Vec::new());
        assert_eq!(allowed_method(&list, "push"), None);
        assert!(is_builtin_callable(&list, "push"));
        assert!(is_builtin_callable(&Value::Number(1.0), "toFixed"));
        assert!(is_builtin_callable(&Value::Bool(true), "toString"));
        assert!(!is_builtin_callable(&list, "name"));
    }

    #[test]
    fn string_slice() {
        let slice = |args: &[Value<'static>]| {
            match dispatch_string_method("entity", Method::Slice, args) {
                Ok(Value::Str(s)) => s.to_string(),
                other => panic!("unexpected {other:?}"),
            }
        };
        assert_eq!(slice(&[Value::Number(1.0)]), "ntity");
        assert_eq!(slice(&[Value::Number(0.0), Value::Number(3.0)]), "ent");
        assert_eq!(slice(&[Value::Number(-3.0)]), "ity");
        assert_eq!(slice(&[Value::Number(4.0), Value::Number(2.0)]), "");
        assert_eq!(slice(&[]), "entity");
    }

    #[test]
    fn case_mapping() {
        let upper = dispatch_string_method("User", Method::ToUpperCase, &[]);
        assert_eq!(upper, Ok(Value::string("USER")));
        let lower = dispatch_string_method("User", Method::ToLowerCase, &[]);
        assert_eq!(lower, Ok(Value::string("user")));
    }
}
