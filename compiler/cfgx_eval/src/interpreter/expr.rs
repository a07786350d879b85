//! Expression handlers: literals, containers, identifiers, member access,
//! templates and arrow functions.

use std::rc::Rc;

use cfgx_syntax::ast::{
    ArrayLit, ArrowExpr, Expr, ExprOrSpread, Ident, Lit, MemberExpr, MemberProp, ObjectLit, ParenExpr,
    Pat, Prop, PropName, PropOrSpread, Tpl, TsAsExpr, TsConstAssertion, TsNonNullExpr,
    TsSatisfiesExpr, TsTypeAssertion,
};
use cfgx_syntax::{expr_kind, Spanned};
use smallvec::SmallVec;

use super::Evaluator;
use crate::errors::{type_mismatch, unresolved_identifier, unsupported_method, EvalError, EvalResult};
use crate::methods::{allowed_method, is_builtin_callable};
use crate::value::{format_number, Closure, Record};
use crate::{Context, Value};

impl<'a> Evaluator<'_, 'a> {
    /// Evaluate an expression in `context`.
    pub fn evaluate_expr(&self, expr: &'a Expr, context: &Context<'a>) -> EvalResult<'a> {
        self.guarded(expr.span(), || self.dispatch_expr(expr, context))
    }

    pub(super) fn dispatch_expr(&self, expr: &'a Expr, ctx: &Context<'a>) -> EvalResult<'a> {
        match expr {
            Expr::Lit(Lit::Str(s)) => Ok(Value::string(&s.value)),
            Expr::Lit(Lit::Num(n)) => Ok(Value::Number(n.value)),
            Expr::Lit(Lit::Bool(b)) => Ok(Value::Bool(b.value)),
            Expr::Lit(Lit::Null(_)) => Ok(Value::Null),
            Expr::Tpl(tpl) => self.eval_template(tpl, ctx),
            Expr::Array(array) => self.eval_array(array, ctx),
            Expr::Object(object) => self.eval_object(object, ctx),
            Expr::Ident(ident) => self.eval_ident(ident, ctx),
            Expr::Member(member) => self.eval_member(member, ctx),
            Expr::Call(call) => self.eval_call(call, ctx),
            Expr::Arrow(arrow) => self.eval_arrow(arrow, ctx),
            Expr::Cond(cond) => self.eval_cond(cond, ctx),
            Expr::Bin(bin) => self.eval_binary(bin, ctx),
            Expr::Unary(unary) => self.eval_unary(unary, ctx),

            // Type-level wrappers have no runtime meaning.
            Expr::Paren(ParenExpr { expr, .. })
            | Expr::TsAs(TsAsExpr { expr, .. })
            | Expr::TsSatisfies(TsSatisfiesExpr { expr, .. })
            | Expr::TsConstAssertion(TsConstAssertion { expr, .. })
            | Expr::TsNonNull(TsNonNullExpr { expr, .. })
            | Expr::TsTypeAssertion(TsTypeAssertion { expr, .. }) => self.evaluate_expr(expr, ctx),

            // Update expressions, `new`, `this`, function expressions,
            // optional chains, regex and bigint literals, ...
            _ => Err(self.unsupported(expr_kind(expr), expr.span())),
        }
    }

    fn eval_template(&self, tpl: &'a Tpl, ctx: &Context<'a>) -> EvalResult<'a> {
        let mut out = String::new();
        for (i, quasi) in tpl.quasis.iter().enumerate() {
            out.push_str(quasi.cooked.as_deref().unwrap_or(&*quasi.raw));
            if let Some(expr) = tpl.exprs.get(i) {
                out.push_str(&self.evaluate_expr(expr, ctx)?.to_display_string());
            }
        }
        Ok(Value::string(&out))
    }

    fn eval_array(&self, array: &'a ArrayLit, ctx: &Context<'a>) -> EvalResult<'a> {
        let mut items = Vec::with_capacity(array.elems.len());
        for elem in &array.elems {
            match elem {
                // Hole: `[a, , b]`.
                None => items.push(Value::Undefined),
                Some(ExprOrSpread {
                    spread: Some(_),
                    expr,
                }) => match self.evaluate_expr(expr, ctx)? {
                    Value::List(spread) => items.extend(spread.iter().cloned()),
                    other => return Err(type_mismatch("list", &other)),
                },
                Some(ExprOrSpread { spread: None, expr }) => {
                    items.push(self.evaluate_expr(expr, ctx)?);
                }
            }
        }
        Ok(Value::list(items))
    }

    fn eval_object(&self, object: &'a ObjectLit, ctx: &Context<'a>) -> EvalResult<'a> {
        let mut record = Record::new();
        for prop in &object.props {
            match prop {
                PropOrSpread::Spread(spread) => match self.evaluate_expr(&spread.expr, ctx)? {
                    Value::Record(other) => record.merge(&other),
                    other => return Err(type_mismatch("record", &other)),
                },
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::Shorthand(ident) => {
                        let value = self.eval_ident(ident, ctx)?;
                        record.insert(Rc::from(&*ident.sym), value);
                    }
                    Prop::KeyValue(entry) => {
                        let key = self.property_key(&entry.key, ctx)?;
                        let value = self.evaluate_expr(&entry.value, ctx)?;
                        record.insert(key, value);
                    }
                    other => return Err(self.unsupported(prop_kind(other), other.span())),
                },
            }
        }
        Ok(Value::record(record))
    }

    fn property_key(&self, key: &'a PropName, ctx: &Context<'a>) -> Result<Rc<str>, EvalError> {
        match key {
            PropName::Ident(name) => Ok(Rc::from(&*name.sym)),
            PropName::Str(s) => Ok(Rc::from(&*s.value)),
            PropName::Num(n) => Ok(Rc::from(format_number(n.value))),
            PropName::Computed(computed) => {
                let key = self.evaluate_expr(&computed.expr, ctx)?;
                Ok(Rc::from(key.to_display_string()))
            }
            PropName::BigInt(big) => Err(self.unsupported("BigIntLiteral", big.span)),
        }
    }

    /// Context binding first, then the definition resolver.
    pub(super) fn eval_ident(&self, ident: &'a Ident, ctx: &Context<'a>) -> EvalResult<'a> {
        let name: &str = &ident.sym;
        if name == "undefined" {
            return Ok(Value::Undefined);
        }
        if let Some(value) = ctx.lookup(name) {
            return Ok(value.clone());
        }

        let Some(definition) = self.resolver.resolve(ident).into_iter().next() else {
            return Err(unresolved_identifier(name));
        };
        tracing::trace!(name, kind = definition.kind(), "following definition");
        // Definitions never see the caller's bindings.
        self.evaluate(definition, &Context::root())
    }

    fn eval_member(&self, member: &'a MemberExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        let target = self.evaluate_expr(&member.obj, ctx)?;
        match &member.prop {
            MemberProp::Ident(name) => get_property(target, &name.sym),
            MemberProp::Computed(computed) => {
                let key = self.evaluate_expr(&computed.expr, ctx)?;
                get_property(target, &key.to_display_string())
            }
            MemberProp::PrivateName(private) => Err(self.unsupported("PrivateIdentifier", private.span)),
        }
    }

    fn eval_arrow(&self, arrow: &'a ArrowExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        if arrow.is_async || arrow.is_generator {
            return Err(self.unsupported("AsyncArrowFunction", arrow.span));
        }

        let mut params = SmallVec::new();
        for param in &arrow.params {
            match param {
                Pat::Ident(binding) => params.push(Rc::from(&*binding.id.sym)),
                other => return Err(self.unsupported(pat_kind(other), other.span())),
            }
        }

        Ok(Value::Closure(Rc::new(Closure {
            params,
            body: &arrow.body,
            env: ctx.clone(),
            span: arrow.span,
        })))
    }
}

/// Project the member `name` out of `target`.
///
/// Allow-listed methods come back bound to their receiver. Any other callable
/// member is an `UnsupportedMethod`; a missing data member is `undefined`.
#[expect(clippy::cast_precision_loss, reason = "lengths of configuration values")]
pub(crate) fn get_property<'a>(target: Value<'a>, name: &str) -> EvalResult<'a> {
    if matches!(target, Value::Undefined | Value::Null) {
        return Err(type_mismatch("object", &target));
    }
    if let Some(method) = allowed_method(&target, name) {
        return Ok(Value::bound(target, method));
    }

    match &target {
        Value::List(items) => {
            if name == "length" {
                return Ok(Value::Number(items.len() as f64));
            }
            if let Some(index) = array_index(name) {
                return Ok(items.get(index).cloned().unwrap_or(Value::Undefined));
            }
        }
        Value::Str(s) => {
            if name == "length" {
                return Ok(Value::Number(s.chars().count() as f64));
            }
            if let Some(index) = array_index(name) {
                let found = s.chars().nth(index).map(|c| Value::string(c.encode_utf8(&mut [0; 4])));
                return Ok(found.unwrap_or(Value::Undefined));
            }
        }
        Value::Record(record) => {
            if let Some(field) = record.get(name) {
                if field.is_callable() {
                    return Err(unsupported_method(name, "record"));
                }
                return Ok(field.clone());
            }
        }
        _ => {}
    }

    if is_builtin_callable(&target, name) {
        return Err(unsupported_method(name, target.type_name()));
    }
    Ok(Value::Undefined)
}

/// A canonical array index: digits only, no leading zeros.
fn array_index(name: &str) -> Option<usize> {
    let index: usize = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

fn prop_kind(prop: &Prop) -> &'static str {
    match prop {
        Prop::Getter(_) => "GetAccessor",
        Prop::Setter(_) => "SetAccessor",
        Prop::Method(_) => "MethodDeclaration",
        Prop::Assign(_) => "ShorthandPropertyAssignment",
        _ => "PropertyAssignment",
    }
}

fn pat_kind(pat: &Pat) -> &'static str {
    match pat {
        Pat::Array(_) => "ArrayBindingPattern",
        Pat::Object(_) => "ObjectBindingPattern",
        Pat::Rest(_) => "RestParameter",
        Pat::Assign(_) => "DefaultParameter",
        _ => "Parameter",
    }
}
