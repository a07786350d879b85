//! Evaluator tests over parsed TypeScript sources.
//!
//! Each test builds an in-memory project, locates a declaration and
//! evaluates it the way a consumer would.

#![allow(clippy::unwrap_used)]

mod control_tests;
mod error_tests;

use cfgx_syntax::Project;

use crate::{EvalError, EvalResult, Evaluator};

/// Evaluate declaration `name` of the first file and hand the result to
/// `check`.
pub(crate) fn evaluate_in<R>(
    sources: &[(&str, &str)],
    name: &str,
    check: impl FnOnce(EvalResult<'_>) -> R,
) -> R {
    evaluate_with(sources, |evaluator, project| {
        let node = project.find_declaration(sources[0].0, name).unwrap();
        check(evaluator.evaluate_entry(node))
    })
}

/// Run `body` with an evaluator over the project built from `sources`.
pub(crate) fn evaluate_with<R>(
    sources: &[(&str, &str)],
    body: impl for<'p> FnOnce(&Evaluator<'_, 'p>, &'p Project) -> R,
) -> R {
    let project = Project::from_sources(sources.iter().copied()).unwrap();
    let resolver = project.resolver();
    let evaluator = Evaluator::new(&resolver);
    body(&evaluator, &project)
}

/// JSON form of declaration `name` in a single-file project.
pub(crate) fn eval_json(source: &str, name: &str) -> Result<serde_json::Value, EvalError> {
    evaluate_in(&[("main.ts", source)], name, |result| result.map(|value| value.to_json()))
}

/// The error raised by evaluating declaration `name`.
pub(crate) fn eval_err(source: &str, name: &str) -> EvalError {
    evaluate_in(&[("main.ts", source)], name, |result| match result {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(err) => err,
    })
}
