use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable view of the sequence stored under one key
///
/// Cloning is cheap (reference counted). The live sequence is only ever
/// replaced whole, so a `DataSet` held by a reader never changes underneath it.
pub struct DataSet<T> {
    items: Arc<[T]>,
}

impl<T> DataSet<T> {
    /// Number of items in the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the items in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether two views share the same underlying allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> DataSet<T> {
    /// Copy the items out into an owned vector
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

impl<T> Clone for DataSet<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for DataSet<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T> From<Vec<T>> for DataSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> FromIterator<T> for DataSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Deref for DataSet<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a DataSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for DataSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DataSet<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for DataSet<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for DataSet<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: fmt::Debug> fmt::Debug for DataSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
