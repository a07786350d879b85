//! `EvaluatorBuilder` for creating evaluators with non-default settings.

use std::cell::RefCell;

use cfgx_syntax::DefinitionResolver;

use super::{Evaluator, DEFAULT_MAX_DEPTH};

/// Builder for [`Evaluator`].
pub struct EvaluatorBuilder<'r, 'a> {
    resolver: &'r dyn DefinitionResolver<'a>,
    max_depth: usize,
}

impl<'r, 'a> EvaluatorBuilder<'r, 'a> {
    pub fn new(resolver: &'r dyn DefinitionResolver<'a>) -> Self {
        Self {
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound on nested evaluation steps before `RecursionLimit` is raised.
    ///
    /// Every syntactic level, followed definition and closure call counts as
    /// one step.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Evaluator<'r, 'a> {
        Evaluator {
            resolver: self.resolver,
            max_depth: self.max_depth,
            trail: RefCell::new(Vec::new()),
        }
    }
}
