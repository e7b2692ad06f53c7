//! Sorting, sortedness checks, ordered application and folds.

use core::cmp::Ordering;

use crate::capacity_policy::CapacityPolicy;

use super::DynArray;

impl<T, Pol: CapacityPolicy> DynArray<T, Pol> {

    /// Sorts in place with a three-way comparator.
    ///
    /// The sort is stable and moves elements through ordinary Rust moves, so any `T`
    /// can be sorted.
    #[inline]
    pub fn sort_by<F>(&mut self, cmp: F)
        where
            F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(cmp)
    }

    #[inline]
    pub fn sort(&mut self)
        where
            T: Ord
    {
        self.as_mut_slice().sort()
    }

    /// Returns true if no adjacent pair compares [`Ordering::Greater`].
    ///
    /// Arrays of length zero or one are always sorted.
    pub fn is_sorted_by<F>(&self, mut cmp: F) -> bool
        where
            F: FnMut(&T, &T) -> Ordering,
    {
        self.as_slice()
            .windows(2)
            .all(|pair| cmp(&pair[0], &pair[1]) != Ordering::Greater)
    }

    #[inline]
    pub fn is_sorted(&self) -> bool
        where
            T: Ord
    {
        self.is_sorted_by(T::cmp)
    }

    /// Calls `op` on every element, from the first to the last.
    pub fn apply<F>(&mut self, mut op: F)
        where
            F: FnMut(&mut T),
    {
        for value in self.iter_mut() {
            op(value)
        }
    }

    /// Calls `op` on every element, from the last to the first.
    pub fn rev_apply<F>(&mut self, mut op: F)
        where
            F: FnMut(&mut T),
    {
        for value in self.iter_mut().rev() {
            op(value)
        }
    }

    /// Right fold: `f(a[0], f(a[1], ... f(a[n - 1], seed)))`.
    ///
    /// The last element is combined first and `seed` is the right operand of that
    /// first combination.
    pub fn fold_right<F>(&self, seed: T, mut f: F) -> T
        where
            F: FnMut(&T, &T) -> T,
    {
        let mut acc = seed;
        for value in self.iter().rev() {
            acc = f(value, &acc);
        }
        acc
    }

    /// Left fold: `f(... f(f(seed, a[0]), a[1]) ..., a[n - 1])`.
    pub fn fold_left<F>(&self, seed: T, mut f: F) -> T
        where
            F: FnMut(&T, &T) -> T,
    {
        let mut acc = seed;
        for value in self.iter() {
            acc = f(&acc, value);
        }
        acc
    }
}
