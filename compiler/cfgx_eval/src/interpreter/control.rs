//! Control flow: statements, blocks, switch, conditionals and operators.

use cfgx_syntax::ast::{
    BinExpr, BlockStmt, CondExpr, Decl, Stmt, SwitchCase, SwitchStmt, UnaryExpr, VarDecl,
    VarDeclarator,
};
use cfgx_syntax::{stmt_kind, Spanned};

use super::Evaluator;
use crate::errors::{arity_error, unsupported_operator, EvalResult};
use crate::operators::{classify_binary, strict_equals, BinaryKind};
use crate::unary_operators::{evaluate_unary, is_supported_unary};
use crate::{Context, Value};

impl<'a> Evaluator<'_, 'a> {
    /// Evaluate a statement in `context`.
    pub fn evaluate_stmt(&self, stmt: &'a Stmt, context: &Context<'a>) -> EvalResult<'a> {
        self.guarded(stmt.span(), || self.dispatch_stmt(stmt, context))
    }

    pub(super) fn dispatch_stmt(&self, stmt: &'a Stmt, ctx: &Context<'a>) -> EvalResult<'a> {
        match stmt {
            Stmt::Block(block) => self.eval_block(block, ctx),
            Stmt::Empty(_) => Ok(Value::Undefined),
            Stmt::Return(ret) => match &ret.arg {
                Some(arg) => self.evaluate_expr(arg, ctx),
                None => Ok(Value::Undefined),
            },
            Stmt::Expr(expr) => self.evaluate_expr(&expr.expr, ctx),
            Stmt::Switch(switch) => self.eval_switch(switch, ctx),
            Stmt::Decl(Decl::Var(var)) => self.eval_var_decl(var, ctx),
            _ => Err(self.unsupported(stmt_kind(stmt), stmt.span())),
        }
    }

    /// A block's value is the value of its first statement.
    pub(super) fn eval_block(&self, block: &'a BlockStmt, ctx: &Context<'a>) -> EvalResult<'a> {
        match block.stmts.first() {
            Some(first) => self.evaluate_stmt(first, ctx),
            None => Ok(Value::Undefined),
        }
    }

    pub(super) fn eval_var_decl(&self, var: &'a VarDecl, ctx: &Context<'a>) -> EvalResult<'a> {
        match var.decls.as_slice() {
            [declarator] => self.eval_declarator(declarator, ctx),
            decls => Err(arity_error(decls.len())),
        }
    }

    pub(super) fn eval_declarator(
        &self,
        declarator: &'a VarDeclarator,
        ctx: &Context<'a>,
    ) -> EvalResult<'a> {
        match &declarator.init {
            Some(init) => self.evaluate_expr(init, ctx),
            None => Ok(Value::Undefined),
        }
    }

    /// Scan clauses in source order.
    ///
    /// A clause's test is evaluated only until some clause has matched.
    /// Once matched, the first clause with a body is the result; empty
    /// clauses fall through. A `default` clause with a body is the result
    /// whenever the scan reaches it, matched or not. An empty `default`
    /// counts as a match, so the next clause with a body is the result even
    /// if a later case test would have matched.
    pub(super) fn eval_switch(&self, switch: &'a SwitchStmt, ctx: &Context<'a>) -> EvalResult<'a> {
        let discriminant = self.evaluate_expr(&switch.discriminant, ctx)?;

        let cases = &switch.cases;
        if cases
            .iter()
            .position(|case| case.test.is_none())
            .is_some_and(|default| default + 1 != cases.len())
        {
            tracing::warn!(
                switch = self.quote(switch.span).as_deref().unwrap_or_default(),
                "`default` is not the last clause; later cases are only reached by falling through"
            );
        }

        let mut matched = false;
        for case in cases {
            match &case.test {
                None => {
                    if !case.cons.is_empty() {
                        return self.eval_clause(case, ctx);
                    }
                    matched = true;
                }
                Some(test) => {
                    if !matched {
                        matched = self.evaluate_expr(test, ctx)? == discriminant;
                    }
                    if matched && !case.cons.is_empty() {
                        return self.eval_clause(case, ctx);
                    }
                }
            }
        }
        Ok(Value::Undefined)
    }

    fn eval_clause(&self, case: &'a SwitchCase, ctx: &Context<'a>) -> EvalResult<'a> {
        match case.cons.as_slice() {
            [stmt] => self.evaluate_stmt(stmt, ctx),
            stmts => Err(arity_error(stmts.len())),
        }
    }

    /// Only the taken branch is evaluated.
    pub(super) fn eval_cond(&self, cond: &'a CondExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        let branch = if self.evaluate_expr(&cond.test, ctx)?.is_truthy() {
            &cond.cons
        } else {
            &cond.alt
        };
        self.evaluate_expr(branch, ctx)
    }

    pub(super) fn eval_binary(&self, bin: &'a BinExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        match classify_binary(bin.op)? {
            BinaryKind::StrictEq => {
                let left = self.evaluate_expr(&bin.left, ctx)?;
                let right = self.evaluate_expr(&bin.right, ctx)?;
                Ok(strict_equals(&left, &right))
            }
            BinaryKind::LogicalOr => {
                let left = self.evaluate_expr(&bin.left, ctx)?;
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.evaluate_expr(&bin.right, ctx)
                }
            }
        }
    }

    pub(super) fn eval_unary(&self, unary: &'a UnaryExpr, ctx: &Context<'a>) -> EvalResult<'a> {
        // Rejected operators never evaluate their operand.
        if !is_supported_unary(unary.op) {
            return Err(unsupported_operator(unary.op.as_str()));
        }
        let operand = self.evaluate_expr(&unary.arg, ctx)?;
        evaluate_unary(unary.op, &operand)
    }
}
