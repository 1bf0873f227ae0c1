use hashbrown::hash_table::{Entry, HashTable};

use crate::contract::Comparable;

/// A set of unique values keyed by [`Comparable::hash_value`], compared with
/// [`Comparable::equals`].
///
/// Correct only as long as equal values hash equally.
pub struct HashedSet<T> {
    table: HashTable<T>,
}

impl<T: Comparable> HashedSet<T> {
    pub fn new() -> Self {
        HashedSet {
            table: HashTable::new(),
        }
    }

    /// Inserts `value`, returning false if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = value.hash_value();
        match self
            .table
            .entry(hash, |other| other.equals(&value), T::hash_value)
        {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// The stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.table
            .find(value.hash_value(), |other| other.equals(value))
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.table
            .find_entry(value.hash_value(), |other| other.equals(value))
            .ok()
            .map(|entry| entry.remove().0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.table.iter()
    }
}

impl<T: Comparable> Default for HashedSet<T> {
    fn default() -> Self {
        HashedSet::new()
    }
}

impl<T: Comparable> Extend<T> for HashedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Comparable> FromIterator<T> for HashedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashedSet::new();
        set.extend(iter);
        set
    }
}
