//! Sets of 1-based parameter indices.

use super::error::ConfigError;
use std::collections::BTreeSet;
use std::fmt;

/// Ordered set of 1-based parameter indices whose joint effect is measured.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::sensitivity::IndexSet;
///
/// let set: IndexSet = [3, 1].into_iter().collect();
/// assert!(set.contains(1));
/// assert!(!set.contains(2));
/// assert_eq!(set.to_string(), "{1, 3}");
/// assert_eq!(set.mask(3), vec![true, false, true]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndexSet(BTreeSet<usize>);

impl IndexSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `{1, ..., dim}`.
    pub fn full(dim: usize) -> Self {
        Self((1..=dim).collect())
    }

    /// Builds a set, rejecting repeated indices.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateIndex` for the first repeated index.
    pub fn try_from_indices<I>(indices: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = BTreeSet::new();
        for index in indices {
            if !set.insert(index) {
                return Err(ConfigError::DuplicateIndex(index));
            }
        }
        Ok(Self(set))
    }

    /// Whether the 1-based `index` belongs to the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Indices of `{1, ..., dim}` not in the set.
    pub fn complement(&self, dim: usize) -> Self {
        Self((1..=dim).filter(|i| !self.contains(*i)).collect())
    }

    /// Membership of each 0-based position `j` (index `j + 1`) for `dim` positions.
    pub fn mask(&self, dim: usize) -> Vec<bool> {
        (1..=dim).map(|i| self.contains(i)).collect()
    }

    /// Checks every index lies in `[1, dim]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IndexOutOfRange` for the first offending index.
    pub fn validate(&self, dim: usize) -> Result<(), ConfigError> {
        match self.iter().find(|&i| i == 0 || i > dim) {
            Some(index) => Err(ConfigError::IndexOutOfRange { index, dim }),
            None => Ok(()),
        }
    }
}

impl FromIterator<usize> for IndexSet {
    /// Collects indices; repeats collapse into one.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeSet<usize>> for IndexSet {
    fn from(set: BTreeSet<usize>) -> Self {
        Self(set)
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            IndexSet::try_from_indices([1, 2, 1]),
            Err(ConfigError::DuplicateIndex(1))
        );
        assert_eq!(IndexSet::try_from_indices([2, 1]).unwrap().len(), 2);
    }

    #[test]
    fn test_validate_range() {
        let set: IndexSet = [1, 4].into_iter().collect();
        assert!(set.validate(4).is_ok());
        assert_eq!(
            set.validate(3),
            Err(ConfigError::IndexOutOfRange { index: 4, dim: 3 })
        );

        let zero: IndexSet = [0].into_iter().collect();
        assert_eq!(
            zero.validate(3),
            Err(ConfigError::IndexOutOfRange { index: 0, dim: 3 })
        );
    }

    #[test]
    fn test_complement_and_full() {
        let set: IndexSet = [2].into_iter().collect();
        assert_eq!(set.complement(3), [1, 3].into_iter().collect());
        assert_eq!(IndexSet::full(3).complement(3), IndexSet::new());
        assert!(IndexSet::new().is_empty());
        assert_eq!(IndexSet::new().to_string(), "{}");
    }
}
