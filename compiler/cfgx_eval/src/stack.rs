//! Native stack growth for the evaluator.
//!
//! Evaluation recurses once per nested expression, statement and call. The
//! `max_depth` setting bounds that recursion; growing the stack here means
//! the bound, not the thread's stack size, decides when a deeply nested
//! configuration fails.

/// Run one evaluation step, moving to a fresh stack segment first if less
/// than `RED_ZONE` bytes remain.
///
/// `Evaluator::guarded` calls this around every step it pushes onto the
/// depth trail.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(step: impl FnOnce() -> R) -> R {
    /// Room one step may use before the next check.
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new segment; covers many steps of nesting.
    const SEGMENT_SIZE: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, step)
}

/// wasm has no stack switching; `max_depth` is the only bound there.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(step: impl FnOnce() -> R) -> R {
    step()
}
