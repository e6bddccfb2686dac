use std::collections::HashMap;

use crate::comparison::NameComparison;

pub(crate) trait Named {
    fn name(&self) -> &str;
}

/// Insertion-ordered list of named entries with lookup by name.
///
/// `index` maps the comparison key of each entry's name to its position in `entries`.
#[derive(Debug, Clone)]
pub(crate) struct OrderedList<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
    comparison: NameComparison,
}

impl<T: Named> OrderedList<T> {
    pub(crate) fn new(comparison: NameComparison) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            comparison,
        }
    }

    pub(crate) fn comparison(&self) -> NameComparison {
        self.comparison
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(self.comparison.key(name).as_ref()).copied()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|i| &self.entries[i])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.position(name).map(|i| &mut self.entries[i])
    }

    /// Returns the entry named `name`, appending the one built by `create` if absent.
    pub(crate) fn get_or_insert_with(&mut self, name: &str, create: impl FnOnce() -> T) -> &mut T {
        let i = match self.position(name) {
            Some(i) => i,
            None => {
                let entry = create();
                debug_assert!(self.comparison.names_equal(entry.name(), name));
                self.index
                    .insert(self.comparison.key(name).into_owned(), self.entries.len());
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        &mut self.entries[i]
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<T> {
        let i = self.index.remove(self.comparison.key(name).as_ref())?;
        let removed = self.entries.remove(i);
        for position in self.index.values_mut() {
            if *position > i {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparison == other.comparison && self.entries == other.entries
    }
}

impl<T: Eq> Eq for OrderedList<T> {}
