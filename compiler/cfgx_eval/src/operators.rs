//! Binary operators.
//!
//! The sub-language has exactly two: strict equality and logical OR. Every
//! other operator is rejected before its operands are evaluated.

use cfgx_syntax::ast::BinaryOp;

use crate::errors::{unsupported_operator, EvalError};
use crate::Value;

/// A supported binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryKind {
    /// `===`: both operands evaluated, compared by value.
    StrictEq,
    /// `||`: the right operand is evaluated only when the left is falsy.
    LogicalOr,
}

/// Classify a parsed operator, rejecting unsupported ones.
pub fn classify_binary(op: BinaryOp) -> Result<BinaryKind, EvalError> {
    match op {
        BinaryOp::EqEqEq => Ok(BinaryKind::StrictEq),
        BinaryOp::LogicalOr => Ok(BinaryKind::LogicalOr),
        other => Err(unsupported_operator(other.as_str())),
    }
}

/// Apply `===` to two evaluated operands.
pub fn strict_equals<'a>(left: &Value<'a>, right: &Value<'a>) -> Value<'a> {
    Value::Bool(left == right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_strict_equality_and_or() {
        assert_eq!(classify_binary(BinaryOp::EqEqEq), Ok(BinaryKind::StrictEq));
        assert_eq!(classify_binary(BinaryOp::LogicalOr), Ok(BinaryKind::LogicalOr));
        for (op, text) in [
            (BinaryOp::EqEq, "=="),
            (BinaryOp::NotEqEq, "!=="),
            (BinaryOp::Add, "+"),
            (BinaryOp::LogicalAnd, "&&"),
            (BinaryOp::NullishCoalescing, "??"),
        ] {
            assert_eq!(
                classify_binary(op),
                Err(EvalError::UnsupportedOperator { op: text })
            );
        }
    }

    #[test]
    fn strict_equality_is_structural() {
        let list = |items: Vec<Value<'static>>| Value::list(items);
        assert_eq!(
            strict_equals(&list(vec![1.0.into(), "a".into()]), &list(vec![1.0.into(), "a".into()])),
            Value::Bool(true)
        );
        assert_eq!(strict_equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)), Value::Bool(false));
        assert_eq!(strict_equals(&Value::Number(0.0), &Value::Number(-0.0)), Value::Bool(true));
        assert_eq!(strict_equals(&Value::Null, &Value::Undefined), Value::Bool(false));
        assert_eq!(strict_equals(&"1".into(), &Value::Number(1.0)), Value::Bool(false));
    }
}
