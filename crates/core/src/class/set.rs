use serde::Serialize;

/// Immutable, sorted, duplicate-free collection.
///
/// Built once from an arbitrary iterator; there is no way to insert or remove
/// afterwards. Duplicates (by `Ord` equality) keep their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedSet<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> SortedSet<T> {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Position of `item` in canonical order, if present.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.binary_search(item).ok()
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// Sorted union of `self` and `other`.
    pub fn merged(&self, other: &SortedSet<T>) -> SortedSet<T> {
        let mut items = Vec::with_capacity(self.len() + other.len());
        let (mut left, mut right) = (self.items.iter().peekable(), other.items.iter().peekable());
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => {
                    if l <= r {
                        if l == r {
                            right.next();
                        }
                        left.next()
                    } else {
                        right.next()
                    }
                }
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some(item) = next {
                items.push(item.clone());
            }
        }
        SortedSet { items }
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        // Stable sort keeps the first of equal items ahead for dedup.
        items.sort();
        items.dedup();
        Self { items }
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
