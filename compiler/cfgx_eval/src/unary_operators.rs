//! Prefix unary operators.
//!
//! `-`, `+`, `~` and `!` are supported with JavaScript conversion rules.
//! `typeof`, `void` and `delete` are rejected. Increment and decrement are
//! update expressions, not unary ones, and never reach this module.

use cfgx_syntax::ast::UnaryOp;

use crate::errors::{unsupported_operator, EvalResult};
use crate::value::to_int32;
use crate::Value;

/// Evaluate a unary operation on an evaluated operand.
pub fn evaluate_unary<'a>(op: UnaryOp, operand: &Value<'a>) -> EvalResult<'a> {
    match op {
        UnaryOp::Minus => Ok(Value::Number(-operand.to_number())),
        UnaryOp::Plus => Ok(Value::Number(operand.to_number())),
        UnaryOp::Tilde => Ok(Value::Number(f64::from(!to_int32(operand.to_number())))),
        UnaryOp::Bang => Ok(Value::Bool(!operand.is_truthy())),
        other => Err(unsupported_operator(other.as_str())),
    }
}

/// Whether `op` is evaluated at all; rejected operators are reported
/// without evaluating their operand.
pub fn is_supported_unary(op: UnaryOp) -> bool {
    matches!(op, UnaryOp::Minus | UnaryOp::Plus | UnaryOp::Tilde | UnaryOp::Bang)
}
