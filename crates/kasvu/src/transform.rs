//! Free functions over an explicitly passed [`DynArray`].
//!
//! Unlike the folds on [`DynArray`] itself, these may change the element type.

use crate::{
    array::DynArray,
    capacity_policy::CapacityPolicy,
    Result,
};

/// Returns a new array of `f` applied to every element of `array`, in index order.
///
/// The result has the same length as `array`, with capacity exactly that length.
pub fn map<T, U, Pol, F>(f: F, array: &DynArray<T, Pol>) -> Result<DynArray<U, Pol>>
    where
        Pol: CapacityPolicy,
        F: FnMut(&T) -> U,
{
    DynArray::collect_exact(array.len(), array.iter().map(f))
}

/// Right fold of `array` into an accumulator of another type.
///
/// Combines from the last element to the first, `seed` being the right operand of
/// the first combination.
pub fn fold<T, U, Pol, F>(mut f: F, array: &DynArray<T, Pol>, seed: U) -> U
    where
        Pol: CapacityPolicy,
        F: FnMut(&T, &U) -> U,
{
    let mut acc = seed;
    for value in array.iter().rev() {
        acc = f(value, &acc);
    }
    acc
}

/// Left fold of `array` into an accumulator of another type.
///
/// Combines from the first element to the last, the running accumulator being the
/// left operand.
pub fn rev_fold<T, U, Pol, F>(mut f: F, array: &DynArray<T, Pol>, seed: U) -> U
    where
        Pol: CapacityPolicy,
        F: FnMut(&U, &T) -> U,
{
    let mut acc = seed;
    for value in array.iter() {
        acc = f(&acc, value);
    }
    acc
}
