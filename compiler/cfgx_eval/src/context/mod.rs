//! Evaluation context: a persistent scope chain.
//!
//! A context is a linked list of immutable frames. Extending a context
//! allocates a new child frame pointing at its parent and leaves the parent
//! untouched, so any number of branches can share a prefix. Capturing the
//! current scope (for a closure) is a reference-count increment.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::Value;

/// A chain of name-to-value frames. The empty chain is the root context.
#[derive(Clone, Default)]
pub struct Context<'a>(Option<Rc<Frame<'a>>>);

struct Frame<'a> {
    bindings: SmallVec<[(Rc<str>, Value<'a>); 4]>,
    parent: Context<'a>,
}

impl<'a> Context<'a> {
    /// The empty root context.
    pub fn root() -> Self {
        Context(None)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// A child context with `bindings` layered over this one.
    ///
    /// Within one frame a later binding of the same name shadows an earlier
    /// one.
    #[must_use]
    pub fn extend<I>(&self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (Rc<str>, Value<'a>)>,
    {
        Context(Some(Rc::new(Frame {
            bindings: bindings.into_iter().collect(),
            parent: self.clone(),
        })))
    }

    #[must_use]
    pub fn bind(&self, name: &str, value: Value<'a>) -> Self {
        self.extend([(Rc::from(name), value)])
    }

    /// Find the innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Value<'a>> {
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            let found = current
                .bindings
                .iter()
                .rev()
                .find(|(bound, _)| &**bound == name);
            if let Some((_, value)) = found {
                return Some(value);
            }
            frame = current.parent.0.as_deref();
        }
        None
    }

    /// Number of frames between this context and the root.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            depth += 1;
            frame = current.parent.0.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            list.entry(&current.bindings.iter().map(|(name, _)| &**name).collect::<Vec<_>>());
            frame = current.parent.0.as_deref();
        }
        list.finish()
    }
}
