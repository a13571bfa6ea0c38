//! Pick-freeze argument assembly.
//!
//! For each 0-based position `j`:
//!
//! | `j + 1` in index set | `arg1[j]` | `arg2[j]` |
//! |----------------------|-----------|-----------|
//! | yes                  | `s1[j]`   | `s2[j]`   |
//! | no                   | `s2[j]`   | `s1[j]`   |
//!
//! `arg1` therefore shares the index set with `s1` and `arg2` shares the
//! complement with `s1`.

use super::index_set::IndexSet;

/// Assembles `(arg1, arg2)` from a draw pair.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::sensitivity::{assemble, IndexSet};
///
/// let set: IndexSet = [1].into_iter().collect();
/// let (arg1, arg2) = assemble(&set, &[1.0, 2.0], &[10.0, 20.0]);
/// assert_eq!(arg1, vec![1.0, 20.0]);
/// assert_eq!(arg2, vec![10.0, 2.0]);
/// ```
pub fn assemble(index_set: &IndexSet, s1: &[f64], s2: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut pair = ArgumentPair::new(s1.len());
    pair.assemble(&index_set.mask(s1.len()), s1, s2);
    (pair.arg1, pair.arg2)
}

/// Reusable buffers for the assembled argument pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentPair {
    arg1: Vec<f64>,
    arg2: Vec<f64>,
}

impl ArgumentPair {
    /// Allocates zeroed buffers for `dim` parameters.
    pub fn new(dim: usize) -> Self {
        Self {
            arg1: vec![0.0; dim],
            arg2: vec![0.0; dim],
        }
    }

    /// Overwrites both arguments; `selected[j]` is membership of index `j + 1`.
    #[inline]
    pub fn assemble(&mut self, selected: &[bool], s1: &[f64], s2: &[f64]) {
        let args = self.arg1.iter_mut().zip(self.arg2.iter_mut());
        for (((a1, a2), &keep), (&x1, &x2)) in args.zip(selected).zip(s1.iter().zip(s2)) {
            if keep {
                *a1 = x1;
                *a2 = x2;
            } else {
                *a1 = x2;
                *a2 = x1;
            }
        }
    }

    /// Argument sharing the index set with `s1`.
    #[inline]
    pub fn arg1(&self) -> &[f64] {
        &self.arg1
    }

    /// Argument sharing the complement with `s1`.
    #[inline]
    pub fn arg2(&self) -> &[f64] {
        &self.arg2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_set_swaps_everything() {
        let (arg1, arg2) = assemble(&IndexSet::new(), &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(arg1, vec![4.0, 5.0, 6.0]);
        assert_eq!(arg2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_full_set_keeps_everything() {
        let (arg1, arg2) = assemble(&IndexSet::full(2), &[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(arg1, vec![1.0, 2.0]);
        assert_eq!(arg2, vec![3.0, 4.0]);
    }

    #[test]
    fn test_buffers_overwritten() {
        let mut pair = ArgumentPair::new(2);
        pair.assemble(&[true, false], &[1.0, 2.0], &[3.0, 4.0]);
        pair.assemble(&[false, true], &[5.0, 6.0], &[7.0, 8.0]);
        assert_eq!(pair.arg1(), &[7.0, 6.0]);
        assert_eq!(pair.arg2(), &[5.0, 8.0]);
    }

    proptest! {
        #[test]
        fn test_assembly_is_a_per_coordinate_permutation(
            draws in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6, any::<bool>()), 1..20)
        ) {
            let s1: Vec<f64> = draws.iter().map(|d| d.0).collect();
            let s2: Vec<f64> = draws.iter().map(|d| d.1).collect();
            let set: IndexSet = draws
                .iter()
                .enumerate()
                .filter(|(_, d)| d.2)
                .map(|(j, _)| j + 1)
                .collect();

            let (arg1, arg2) = assemble(&set, &s1, &s2);
            let (swap1, swap2) = assemble(&set.complement(s1.len()), &s1, &s2);

            for j in 0..s1.len() {
                if set.contains(j + 1) {
                    prop_assert_eq!((arg1[j], arg2[j]), (s1[j], s2[j]));
                } else {
                    prop_assert_eq!((arg1[j], arg2[j]), (s2[j], s1[j]));
                }
            }
            // Complementing the set exchanges the roles of arg1 and arg2
            prop_assert_eq!(swap1, arg2);
            prop_assert_eq!(swap2, arg1);
        }
    }
}
