//! Insertion-ordered string-keyed records.

use std::rc::Rc;

use super::Value;

/// An object literal's value.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value in place. Records from configuration sources are
/// small, so entries live in a flat vector.
#[derive(Clone, Debug, Default)]
pub struct Record<'a> {
    entries: Vec<(Rc<str>, Value<'a>)>,
}

impl<'a> Record<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    pub fn insert(&mut self, key: Rc<str>, value: Value<'a>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Copy every entry of `other` into this record, in `other`'s order.
    pub fn merge(&mut self, other: &Record<'a>) {
        for (key, value) in &other.entries {
            self.insert(Rc::clone(key), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.entries
            .iter()
            .find(|(existing, _)| &**existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Value<'a>)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + use<'_, 'a> {
        self.entries.iter().map(|(key, _)| &**key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structural equality; key order is irrelevant.
impl PartialEq for Record<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|theirs| theirs == value))
    }
}

impl<'a, K: Into<Rc<str>>> FromIterator<(K, Value<'a>)> for Record<'a> {
    fn from_iter<I: IntoIterator<Item = (K, Value<'a>)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key.into(), value);
        }
        record
    }
}
