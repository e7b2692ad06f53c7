mod raw_buf;
mod dyn_array;
mod iter;
mod traversal;

pub use dyn_array::DynArray;
pub use iter::{Iter, IterMut};
