use std::collections::BTreeSet;

/// Accumulator for unique translation keys.
///
/// Keys compare as raw strings. Iteration yields them in ascending order by
/// code point, which is the order they are written to the template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeySet {
    keys: BTreeSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for KeySet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
