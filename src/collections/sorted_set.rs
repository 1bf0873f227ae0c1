use crate::contract::Comparable;

/// A set of unique values kept in ascending [`Comparable::compare`] order.
///
/// Two values are the same element exactly when neither compares before the other, so
/// the ordering must be a strict weak order whose ties coincide with equality.
pub struct SortedSet<T> {
    values: Vec<T>,
}

impl<T: Comparable> SortedSet<T> {
    pub fn new() -> Self {
        SortedSet { values: Vec::new() }
    }

    fn search(&self, value: &T) -> Result<usize, usize> {
        self.values.binary_search_by(|probe| probe.compare(value))
    }

    /// Inserts `value` at its sorted position, returning false if an equivalent value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(position) => {
                self.values.insert(position, value);
                true
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.search(value)
            .ok()
            .map(|position| self.values.remove(position))
    }

    /// Number of stored values ordered strictly before `value`.
    pub fn rank(&self, value: &T) -> usize {
        self.values.partition_point(|probe| probe.less(value))
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: Comparable> Default for SortedSet<T> {
    fn default() -> Self {
        SortedSet::new()
    }
}

impl<T: Comparable> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Comparable> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SortedSet::new();
        set.extend(iter);
        set
    }
}
