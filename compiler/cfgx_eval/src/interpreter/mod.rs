//! Tree-walking evaluator for the declarative sub-language.
//!
//! # Architecture
//!
//! - `Evaluator::evaluate` accepts any [`Node`] handed over by a consumer or
//!   the definition resolver.
//! - `dispatch_expr` / `dispatch_stmt` are exhaustive matches over the swc
//!   syntax enums. Each supported form has one arm; one fallback arm turns
//!   everything else into `UnsupportedConstruct`.
//! - Every recursive step runs through a depth guard that also records the
//!   span of each active node. The trail bounds recursion and supplies the
//!   parent text quoted in `UnsupportedConstruct`.
//!
//! The evaluator holds no state besides the trail; evaluating the same node
//! twice yields equal values.

mod builder;
mod call;
mod control;
mod expr;

use std::cell::RefCell;

use cfgx_syntax::{DefinitionResolver, Node, Span};

use crate::errors::{recursion_limit, unsupported_construct, EvalError, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::Context;

pub use builder::EvaluatorBuilder;

/// Default bound on nested evaluation steps.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Longest node text quoted in a diagnostic.
const MAX_QUOTE_CHARS: usize = 120;

/// Evaluates nodes of one parsed project.
///
/// `'a` is the lifetime of the parsed source tree; `'r` that of the
/// borrowed resolver.
pub struct Evaluator<'r, 'a> {
    resolver: &'r dyn DefinitionResolver<'a>,
    max_depth: usize,
    /// Spans of the nodes currently being evaluated, outermost first.
    trail: RefCell<Vec<Span>>,
}

impl<'r, 'a> Evaluator<'r, 'a> {
    /// An evaluator with default settings.
    pub fn new(resolver: &'r dyn DefinitionResolver<'a>) -> Self {
        EvaluatorBuilder::new(resolver).build()
    }

    pub fn builder(resolver: &'r dyn DefinitionResolver<'a>) -> EvaluatorBuilder<'r, 'a> {
        EvaluatorBuilder::new(resolver)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluate `node` with an empty root context.
    pub fn evaluate_entry(&self, node: Node<'a>) -> EvalResult<'a> {
        self.evaluate(node, &Context::root())
    }

    /// Evaluate any node in `context`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = node.kind()))]
    pub fn evaluate(&self, node: Node<'a>, context: &Context<'a>) -> EvalResult<'a> {
        self.guarded(node.span(), || match node {
            Node::Expr(expr) => self.dispatch_expr(expr, context),
            Node::Stmt(stmt) => self.dispatch_stmt(stmt, context),
            Node::VarDecl(decl) => self.eval_var_decl(decl, context),
            Node::Declarator(declarator) => self.eval_declarator(declarator, context),
            Node::Unsupported { kind, span } => Err(self.unsupported(kind, span)),
        })
    }

    /// Run one evaluation step for the node at `span`.
    fn guarded(&self, span: Span, step: impl FnOnce() -> EvalResult<'a>) -> EvalResult<'a> {
        let _guard = self.enter(span)?;
        ensure_sufficient_stack(step)
    }

    fn enter(&self, span: Span) -> Result<DepthGuard<'_>, EvalError> {
        let mut trail = self.trail.borrow_mut();
        if trail.len() >= self.max_depth {
            tracing::debug!(limit = self.max_depth, "recursion limit reached");
            return Err(recursion_limit(self.max_depth));
        }
        trail.push(span);
        Ok(DepthGuard { trail: &self.trail })
    }

    /// `UnsupportedConstruct` for the node at `span`, quoting the innermost
    /// enclosing node on the trail as its parent.
    #[cold]
    fn unsupported(&self, kind: &'static str, span: Span) -> EvalError {
        let text = self.quote(span).unwrap_or_default();
        let parent = self
            .trail
            .borrow()
            .iter()
            .rev()
            .find(|active| **active != span)
            .and_then(|active| self.quote(*active));
        unsupported_construct(kind, text, parent)
    }

    fn quote(&self, span: Span) -> Option<String> {
        let text = self.resolver.source_text(span)?;
        if text.chars().count() <= MAX_QUOTE_CHARS {
            return Some(text.to_string());
        }
        let mut quoted: String = text.chars().take(MAX_QUOTE_CHARS - 3).collect();
        quoted.push_str("...");
        Some(quoted)
    }
}

/// Pops the trail entry pushed by `Evaluator::enter`, also when unwinding.
struct DepthGuard<'g> {
    trail: &'g RefCell<Vec<Span>>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.trail.borrow_mut().pop();
    }
}
