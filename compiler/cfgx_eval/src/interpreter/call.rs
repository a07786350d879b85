//! Calls: closure invocation and allow-listed method dispatch.

use std::rc::Rc;

use cfgx_syntax::ast::{BlockStmtOrExpr, CallExpr, Callee};

use super::Evaluator;
use crate::errors::{not_callable, type_mismatch, unsupported_method, EvalResult};
use crate::methods::{dispatch_string_method, Method};
use crate::value::Closure;
use crate::{Context, Value};

impl<'a> Evaluator<'_, 'a> {
    pub(super) fn eval_call(&self, call: &'a CallExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        let callee = match &call.callee {
            Callee::Expr(callee) => self.evaluate_expr(callee, ctx)?,
            Callee::Super(_) => return Err(self.unsupported("SuperCall", call.span)),
            Callee::Import(_) => return Err(self.unsupported("ImportCall", call.span)),
        };

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            let value = self.evaluate_expr(&arg.expr, ctx)?;
            if arg.spread.is_none() {
                args.push(value);
                continue;
            }
            match value {
                Value::List(items) => args.extend(items.iter().cloned()),
                other => return Err(type_mismatch("list", &other)),
            }
        }

        self.call(&callee, args)
    }

    /// Invoke a callable value.
    pub fn call(&self, callee: &Value<'a>, args: Vec<Value<'a>>) -> EvalResult<'a> {
        match callee {
            Value::Closure(closure) => self.invoke_closure(closure, args),
            Value::Method(bound) => match &bound.receiver {
                Value::Str(s) => dispatch_string_method(s, bound.method, &args),
                Value::List(items) => self.dispatch_list_method(&bound.receiver, items, bound.method, args),
                other => Err(unsupported_method(bound.method.name(), other.type_name())),
            },
            other => Err(not_callable(other)),
        }
    }

    /// Bind parameters over the captured context and evaluate the body.
    ///
    /// Missing arguments bind `undefined`; surplus ones are dropped.
    fn invoke_closure(&self, closure: &Closure<'a>, args: Vec<Value<'a>>) -> EvalResult<'a> {
        let mut args = args.into_iter();
        let scope = closure.env.extend(
            closure
                .params
                .iter()
                .map(|param| (Rc::clone(param), args.next().unwrap_or(Value::Undefined))),
        );

        self.guarded(closure.span, || match closure.body {
            BlockStmtOrExpr::BlockStmt(block) => self.eval_block(block, &scope),
            BlockStmtOrExpr::Expr(expr) => self.evaluate_expr(expr, &scope),
        })
    }

    /// List methods call back into evaluated code with `(item, index, list)`.
    #[expect(clippy::cast_precision_loss, reason = "indices of configuration lists")]
    fn dispatch_list_method(
        &self,
        list: &Value<'a>,
        items: &[Value<'a>],
        method: Method,
        args: Vec<Value<'a>>,
    ) -> EvalResult<'a> {
        let first = args.into_iter().next().unwrap_or(Value::Undefined);
        if method == Method::Includes {
            return Ok(Value::Bool(items.iter().any(|item| *item == first)));
        }

        let callback = first;
        if !callback.is_callable() {
            return Err(not_callable(&callback));
        }
        let apply = |index: usize, item: &Value<'a>| {
            self.call(
                &callback,
                vec![item.clone(), Value::Number(index as f64), list.clone()],
            )
        };

        match method {
            Method::Map => items
                .iter()
                .enumerate()
                .map(|(index, item)| apply(index, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::list),
            Method::FlatMap => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match apply(index, item)? {
                        Value::List(inner) => out.extend(inner.iter().cloned()),
                        other => out.push(other),
                    }
                }
                Ok(Value::list(out))
            }
            Method::Some => {
                for (index, item) in items.iter().enumerate() {
                    if apply(index, item)?.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            Method::Find => {
                for (index, item) in items.iter().enumerate() {
                    if apply(index, item)?.is_truthy() {
                        return Ok(item.clone());
                    }
                }
                Ok(Value::Undefined)
            }
            Method::Filter => {
                let mut out = Vec::new();
                for (index, item) in items.iter().enumerate() {
                    if apply(index, item)?.is_truthy() {
                        out.push(item.clone());
                    }
                }
                Ok(Value::list(out))
            }
            other => Err(unsupported_method(other.name(), "list")),
        }
    }
}
