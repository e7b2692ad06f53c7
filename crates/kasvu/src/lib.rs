//! A resizable, contiguous array with amortized growth.
//!
//! [`DynArray`] owns a single buffer of `T`, tracks its logical length separately from
//! the allocated capacity and grows according to a [`CapacityPolicy`]. On top of the
//! usual container operations it offers in-place sorting through an external
//! comparator, forward and backward application of a mutating operation, and left and
//! right folds. The free functions in [`transform`] do the same over an explicitly
//! passed array.
//!
//! Logging of reallocations and allocation failures goes through `kasvu-log` when the
//! `std` feature is enabled.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;
mod errors;
mod allocator;
mod global_alloc;

pub mod capacity_policy;
pub mod array;
pub mod transform;

pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::{CapacityPolicy, Doubling, Exact};
pub use array::{DynArray, Iter, IterMut};
pub use transform::{map, fold, rev_fold};

pub type Result<T> = core::result::Result<T, CapacityError>;
