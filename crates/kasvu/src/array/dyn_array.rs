use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut},
    ptr,
    slice,
};

use crate::{
    capacity_policy::{CapacityPolicy, Doubling},
    errors::CapacityError,
    Result,
};

use super::{
    raw_buf::RawBuf,
    Iter,
    IterMut,
};

use CapacityError::{AllocFailed, IndexOutOfBounds};

/// A resizable array owning one contiguous buffer.
///
/// The logical length is tracked separately from the allocated capacity. Slots in
/// `[len, capacity)` are allocated but uninitialized and are never exposed. When the
/// array outgrows its buffer, `Pol` decides the new capacity; with the default
/// [`Doubling`] policy a sequence of single-element growths costs amortized O(1).
/// Capacity is only released when the array is dropped or replaced.
///
/// # Reference invalidation
/// Any operation that may reallocate (`resize`, `reserve`, `push`, `append`, `+=`)
/// moves the elements to a new buffer. Raw pointers taken into the array before such
/// a call dangle afterwards; borrowed references are ruled out by the borrow checker.
///
/// # Threads
/// The array does no internal synchronization. It may be moved to or shared with other
/// threads under the usual `Send`/`Sync` rules for `T`; concurrent mutation requires
/// external locking by the caller.
pub struct DynArray<T, Pol: CapacityPolicy = Doubling> {
    buf: RawBuf<T>,
    len: usize,
    _policy: PhantomData<Pol>,
}

const_assert!(size_of!(DynArray<u32>) == size_of!(Option<DynArray<u32>>));

unsafe impl<T: Send, Pol: CapacityPolicy> Send for DynArray<T, Pol> {}
unsafe impl<T: Sync, Pol: CapacityPolicy> Sync for DynArray<T, Pol> {}

impl<T, Pol: CapacityPolicy> DynArray<T, Pol> {

    /// Creates an empty array without allocating.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Creates an array of `len` default values with capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self>
        where
            T: Default
    {
        Self::with_len_with(len, T::default)
    }

    /// Creates an array of `len` copies of `value` with capacity exactly `len`.
    pub fn with_value(len: usize, value: T) -> Result<Self>
        where
            T: Clone
    {
        Self::with_len_with(len, || value.clone())
    }

    /// Creates an array of `len` elements produced by `f`, with capacity exactly `len`.
    pub fn with_len_with<F>(len: usize, mut f: F) -> Result<Self>
        where
            F: FnMut() -> T,
    {
        let mut arr = Self {
            buf: RawBuf::allocate(len)?,
            len: 0,
            _policy: PhantomData,
        };
        while arr.len < len {
            unsafe { arr.buf.ptr().add(arr.len).write(f()) };
            arr.len += 1;
        }
        Ok(arr)
    }

    /// Creates an array holding clones of `values`, with capacity exactly
    /// `values.len()`.
    pub fn from_slice(values: &[T]) -> Result<Self>
        where
            T: Clone
    {
        Self::collect_exact(values.len(), values.iter().cloned())
    }

    /// Allocates exactly `len` slots and fills them from `iter`, stopping early if the
    /// iterator runs out.
    pub(crate) fn collect_exact<I>(len: usize, iter: I) -> Result<Self>
        where
            I: Iterator<Item = T>,
    {
        let mut arr = Self {
            buf: RawBuf::allocate(len)?,
            len: 0,
            _policy: PhantomData,
        };
        for value in iter.take(len) {
            unsafe { arr.buf.ptr().add(arr.len).write(value) };
            arr.len += 1;
        }
        Ok(arr)
    }

    /// Deep copy with capacity exactly `self.len()`.
    #[inline(always)]
    pub fn try_clone(&self) -> Result<Self>
        where
            T: Clone
    {
        Self::from_slice(self.as_slice())
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// The copy is built before the old buffer is released, so on error `self` is left
    /// untouched.
    pub fn assign(&mut self, source: &[T]) -> Result<()>
        where
            T: Clone
    {
        *self = Self::from_slice(source)?;
        Ok(())
    }

    /// Overwrites every element with `value`. Length and capacity are unchanged.
    #[inline]
    pub fn fill(&mut self, value: T)
        where
            T: Clone
    {
        self.as_mut_slice().fill(value)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Checked access.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.buf.ptr().add(index).as_ref() })
    }

    /// Checked mutable access.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.buf.ptr().add(index).as_mut() })
    }

    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { self.buf.ptr().add(index).as_ref() }
    }

    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { self.buf.ptr().add(index).as_mut() }
    }

    /// Makes room for at least `capacity` elements in total, growing by the policy.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        let Some(new_capacity) = Pol::grow(self.buf.capacity(), capacity) else {
            return Ok(())
        };
        let new_buf = RawBuf::allocate(new_capacity)?;
        debug_assert!(self.len <= self.buf.capacity());
        unsafe {
            ptr::copy_nonoverlapping(
                self.buf.ptr().as_ptr(),
                new_buf.ptr().as_ptr(),
                self.len,
            );
        }
        log_trace!(
            "reallocating {} from capacity {} to {}",
            core::any::type_name::<T>(), self.buf.capacity(), new_capacity,
        );
        // the elements now live in `new_buf`, dropping the old buffer only frees it
        self.buf = new_buf;
        Ok(())
    }

    /// Sets the logical length to `len`, filling new slots with `T::default()`.
    ///
    /// Growing past the capacity reallocates to `Pol::grow(capacity, len)`; with
    /// [`Doubling`] that is `max(2 * capacity, len)`, or exactly `len` from empty.
    /// Shrinking drops the elements in `[len, self.len())` and keeps the capacity.
    /// On error nothing has changed.
    #[inline]
    pub fn resize(&mut self, len: usize) -> Result<()>
        where
            T: Default
    {
        self.resize_with(len, T::default)
    }

    /// Like [`resize`](Self::resize), with new elements produced by `f`.
    pub fn resize_with<F>(&mut self, len: usize, mut f: F) -> Result<()>
        where
            F: FnMut() -> T
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(())
        }
        self.reserve(len)?;
        while self.len < len {
            unsafe { self.buf.ptr().add(self.len).write(f()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Drops the elements in `[len, self.len())`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return
        }
        let tail = ptr::slice_from_raw_parts_mut(
            unsafe { self.buf.ptr().add(len).as_ptr() },
            self.len - len,
        );
        self.len = len;
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Appends one element, growing by the policy when full.
    pub fn push(&mut self, value: T) -> Result<&mut T> {
        if self.len == self.buf.capacity() {
            let required = self.len
                .checked_add(1)
                .ok_or(AllocFailed { new_capacity: usize::MAX })?;
            self.reserve(required)?;
        }
        let mut ptr = unsafe { self.buf.ptr().add(self.len) };
        unsafe { ptr.write(value) };
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Appends clones of `other`, preserving their order.
    ///
    /// The array is grown once to `self.len() + other.len()`. On error nothing has
    /// changed.
    pub fn append(&mut self, other: &[T]) -> Result<()>
        where
            T: Clone
    {
        let required = self.len
            .checked_add(other.len())
            .ok_or(AllocFailed { new_capacity: usize::MAX })?;
        self.reserve(required)?;
        for value in other {
            unsafe { self.buf.ptr().add(self.len).write(value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Returns a new array holding `self` followed by `other`. Neither operand changes.
    pub fn concat(&self, other: &[T]) -> Result<Self>
        where
            T: Clone
    {
        let mut ret = self.try_clone()?;
        ret.append(other)?;
        Ok(ret)
    }

    /// Returns a new array with the elements in reverse order.
    #[inline]
    pub fn reversed(&self) -> Result<Self>
        where
            T: Clone
    {
        Self::collect_exact(self.len, self.iter().rev().cloned())
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.buf.ptr(), self.len) }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.buf.ptr(), self.len) }
    }
}

impl_traits!{
    for DynArray<T, Pol: CapacityPolicy>
    Drop => {

        #[inline(always)]
        fn drop(&mut self) {
            self.clear()
        }
    },
    Default => {

        #[inline(always)]
        fn default() -> Self {
            Self::new()
        }
    },
    Index<usize> => {

        type Output = T;

        #[inline(always)]
        fn index(&self, index: usize) -> &Self::Output {
            if index >= self.len {
                panic!("index {} out of bounds for length {}", index, self.len)
            }
            unsafe { self.buf.ptr().add(index).as_ref() }
        }
    },
    IndexMut<usize> => {

        #[inline(always)]
        fn index_mut(&mut self, index: usize) -> &mut Self::Output {
            if index >= self.len {
                panic!("index {} out of bounds for length {}", index, self.len)
            }
            unsafe { self.buf.ptr().add(index).as_mut() }
        }
    },
    AsRef<[T]> => {

        #[inline(always)]
        fn as_ref(&self) -> &[T] {
            self.as_slice()
        }
    },
    AsMut<[T]> => {

        #[inline(always)]
        fn as_mut(&mut self) -> &mut [T] {
            self.as_mut_slice()
        }
    },
    Deref => {

        type Target = [T];

        #[inline(always)]
        fn deref(&self) -> &Self::Target {
            self.as_slice()
        }
    },
    DerefMut => {

        #[inline(always)]
        fn deref_mut(&mut self) -> &mut Self::Target {
            self.as_mut_slice()
        }
    },
    IntoIterator for &'arr => {

        type Item = &'arr T;
        type IntoIter = Iter<'arr, T>;

        #[inline(always)]
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    },
    IntoIterator for mut &'arr => {

        type Item = &'arr mut T;
        type IntoIter = IterMut<'arr, T>;

        #[inline(always)]
        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    },
}

impl<T: Clone, Pol: CapacityPolicy> Clone for DynArray<T, Pol> {

    /// # Panics
    /// If the allocation fails. Use [`DynArray::try_clone`] to handle the error.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(arr) => arr,
            Err(err) => panic!("{}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign(source) {
            panic!("{}", err)
        }
    }
}

impl<T, U, P1, P2> PartialEq<DynArray<U, P2>> for DynArray<T, P1>
    where
        T: PartialEq<U>,
        P1: CapacityPolicy,
        P2: CapacityPolicy,
{

    fn eq(&self, other: &DynArray<U, P2>) -> bool {
        if self.len != other.len {
            return false
        }
        for i in 0..self.len {
            if unsafe { self.get_unchecked(i) != other.get_unchecked(i) } {
                return false
            }
        }
        true
    }
}

impl<T: Eq, Pol: CapacityPolicy> Eq for DynArray<T, Pol> {}

impl<T: PartialEq, Pol: CapacityPolicy> PartialEq<[T]> for DynArray<T, Pol> {

    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, Pol: CapacityPolicy, const N: usize> PartialEq<[T; N]> for DynArray<T, Pol> {

    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Debug, Pol: CapacityPolicy> Debug for DynArray<T, Pol> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, Pol: CapacityPolicy> FromIterator<T> for DynArray<T, Pol> {

    /// # Panics
    /// If an allocation fails.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Self::new();
        if let Err(err) = arr.reserve(iter.size_hint().0) {
            panic!("{}", err)
        }
        for value in iter {
            if let Err(err) = arr.push(value) {
                panic!("{}", err)
            }
        }
        arr
    }
}

impl<T: Clone, Pol: CapacityPolicy> TryFrom<&[T]> for DynArray<T, Pol> {

    type Error = CapacityError;

    #[inline(always)]
    fn try_from(value: &[T]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl<T: Clone, Pol: CapacityPolicy> AddAssign<&DynArray<T, Pol>> for DynArray<T, Pol> {

    /// # Panics
    /// If the allocation fails. Use [`DynArray::append`] to handle the error.
    fn add_assign(&mut self, rhs: &DynArray<T, Pol>) {
        if let Err(err) = self.append(rhs) {
            panic!("{}", err)
        }
    }
}

impl<T: Clone, Pol: CapacityPolicy> Add<&DynArray<T, Pol>> for &DynArray<T, Pol> {

    type Output = DynArray<T, Pol>;

    /// # Panics
    /// If the allocation fails. Use [`DynArray::concat`] to handle the error.
    fn add(self, rhs: &DynArray<T, Pol>) -> Self::Output {
        match self.concat(rhs) {
            Ok(arr) => arr,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {

    use std::{rc::Rc, cell::Cell};

    use quickcheck::quickcheck;

    use super::*;
    use crate::Exact;

    fn arr(values: &[i32]) -> DynArray<i32> {
        DynArray::from_slice(values).unwrap()
    }

    /// Counts drops through a shared counter.
    #[derive(Clone)]
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_does_not_allocate() {
        let arr = DynArray::<u64>::new();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr, []);
    }

    #[test]
    fn sized_construction_is_exact_and_defaulted() {
        let arr = DynArray::<u8>::with_len(5).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr, [0; 5]);
        let empty = DynArray::<u8>::with_len(0).unwrap();
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn filled_construction_repeats_value() {
        let arr = DynArray::<&str>::with_value(3, "x").unwrap();
        assert_eq!(arr, ["x", "x", "x"]);
    }

    #[test]
    fn fill_overwrites_in_place() {
        let mut a = arr(&[1, 2, 3]);
        a.reserve(10).unwrap();
        let capacity = a.capacity();
        let ptr = a.as_ptr();
        a.fill(7);
        assert_eq!(a, [7, 7, 7]);
        assert_eq!(a.capacity(), capacity);
        assert_eq!(a.as_ptr(), ptr);
    }

    #[test]
    fn assign_replaces_contents() {
        let mut a = arr(&[1, 2, 3, 4]);
        let b = arr(&[9]);
        a.assign(&b).unwrap();
        assert_eq!(a, [9]);
        assert_eq!(a.capacity(), 1);
        let mut c = arr(&[5, 5]);
        c.clone_from(&a);
        assert_eq!(c, a);
    }

    #[test]
    fn clone_is_independent() {
        let a = arr(&[1, 2, 3]);
        let mut b = a.clone();
        b[0] = 100;
        b.push(4).unwrap();
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [100, 2, 3, 4]);
    }

    #[test]
    fn resize_from_empty_is_exact() {
        let mut a = DynArray::<i32>::new();
        a.resize(3).unwrap();
        assert_eq!(a.capacity(), 3);
        assert_eq!(a, [0, 0, 0]);
    }

    #[test]
    fn resize_within_capacity_keeps_buffer() {
        let mut a = arr(&[1, 2, 3, 4]);
        let ptr = a.as_ptr();
        a.resize(2).unwrap();
        assert_eq!(a, [1, 2]);
        assert_eq!(a.capacity(), 4);
        a.resize(4).unwrap();
        assert_eq!(a, [1, 2, 0, 0]);
        assert_eq!(a.as_ptr(), ptr);
    }

    #[test]
    fn resize_past_capacity_doubles() {
        let mut a = arr(&[1, 2, 3]);
        a.resize(4).unwrap();
        assert_eq!(a.capacity(), 6);
        assert_eq!(a, [1, 2, 3, 0]);
        a.resize(20).unwrap();
        assert_eq!(a.capacity(), 20);
        assert_eq!(&a.as_slice()[..3], &[1, 2, 3]);
    }

    #[test]
    fn exact_policy_grows_to_request() {
        let mut a = DynArray::<i32, Exact>::from_slice(&[1, 2, 3]).unwrap();
        a.resize(4).unwrap();
        assert_eq!(a.capacity(), 4);
    }

    #[test]
    fn failed_resize_leaves_array_untouched() {
        let mut a = arr(&[1, 2, 3]);
        let err = a.resize(usize::MAX).unwrap_err();
        assert_eq!(err, AllocFailed { new_capacity: usize::MAX });
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a.capacity(), 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn reallocation_and_allocation_failure_are_logged() {
        use kasvu_log::{Level, emitted};
        kasvu_log::init_with_filters("kasvu=trace");
        let traces = emitted(Level::Trace);
        let errors = emitted(Level::Error);
        let mut a = arr(&[1, 2]);
        a.push(3).unwrap();
        assert_eq!(a.capacity(), 4);
        assert!(emitted(Level::Trace) > traces);
        assert!(a.resize(usize::MAX).is_err());
        assert!(emitted(Level::Error) > errors);
    }

    #[test]
    fn shrinking_drops_tail_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut a = DynArray::<Tracked>::with_value(5, Tracked(drops.clone())).unwrap();
        // the prototype passed to with_value
        assert_eq!(drops.get(), 1);
        a.resize_with(2, || unreachable!()).unwrap();
        assert_eq!(drops.get(), 4);
        assert_eq!(a.capacity(), 5);
        drop(a);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn growth_moves_elements_without_dropping() {
        let drops = Rc::new(Cell::new(0));
        let mut a = DynArray::<Tracked>::new();
        for _ in 0..33 {
            a.push(Tracked(drops.clone())).unwrap();
        }
        assert_eq!(drops.get(), 0);
        assert_eq!(a.len(), 33);
        a.clear();
        assert_eq!(drops.get(), 33);
        assert!(a.capacity() >= 33);
    }

    #[test]
    fn push_grows_geometrically() {
        let mut a = DynArray::<u32>::new();
        let mut capacities = vec![];
        for i in 0..9 {
            a.push(i).unwrap();
            if capacities.last() != Some(&a.capacity()) {
                capacities.push(a.capacity());
            }
        }
        assert_eq!(capacities, [1, 2, 4, 8, 16]);
        assert_eq!(a.pop(), Some(8));
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn append_and_concat() {
        let mut a = arr(&[1, 2]);
        let b = arr(&[3, 4]);
        assert_eq!(a.concat(&b).unwrap(), [1, 2, 3, 4]);
        assert_eq!(&a + &b, [1, 2, 3, 4]);
        assert_eq!(a, [1, 2]);
        a += &b;
        assert_eq!(a, [1, 2, 3, 4]);
        assert_eq!(b, [3, 4]);
        a.append(&[]).unwrap();
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn appending_a_copy_of_itself() {
        let mut a = arr(&[1, 2]);
        a += &a.clone();
        assert_eq!(a, [1, 2, 1, 2]);
        let copy = a.clone();
        a.append(&copy).unwrap();
        assert_eq!(a, [1, 2, 1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn panicking_producer_keeps_written_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut a = DynArray::<Tracked>::new();
        let mut made = 0;
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            a.resize_with(5, || {
                if made == 3 {
                    panic!("producer failed")
                }
                made += 1;
                Tracked(drops.clone())
            })
        }));
        assert!(res.is_err());
        assert_eq!(a.len(), 3);
        assert_eq!(drops.get(), 0);
        drop(a);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn reversed_leaves_receiver_alone() {
        let a = arr(&[1, 2]);
        assert_eq!(a.reversed().unwrap(), [2, 1]);
        assert_eq!(a, [1, 2]);
        assert_eq!(DynArray::<i32>::new().reversed().unwrap(), []);
    }

    #[test]
    fn checked_access_reports_bounds() {
        let mut a = arr(&[10, 20]);
        assert_eq!(a.get(1), Ok(&20));
        assert_eq!(a.get(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
        *a.get_mut(0).unwrap() += 1;
        assert_eq!(a[0], 11);
        assert!(a.get_mut(5).is_err());
        assert_eq!(unsafe { *a.get_unchecked(1) }, 20);
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn index_past_len_panics() {
        let a = arr(&[1, 2, 3]);
        let _ = a[a.len()];
    }

    #[test]
    fn equality_needs_same_length_and_elements() {
        assert_eq!(arr(&[1, 2]), arr(&[1, 2]));
        assert_ne!(arr(&[1, 2]), arr(&[1, 2, 3]));
        assert_ne!(arr(&[1, 2]), arr(&[2, 1]));
        let exact = DynArray::<i32, Exact>::from_slice(&[1, 2]).unwrap();
        assert!(arr(&[1, 2]) == exact);
    }

    #[test]
    fn zero_sized_elements() {
        let mut a = DynArray::<()>::with_len(3).unwrap();
        a.resize(100).unwrap();
        assert_eq!(a.len(), 100);
        assert_eq!(a.pop(), Some(()));
        assert_eq!(a.reversed().unwrap().len(), 99);
    }

    #[test]
    fn debug_lists_elements() {
        assert_eq!(format!("{:?}", arr(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn collect_and_try_from() {
        let a: DynArray<i32> = (0..4).collect();
        assert_eq!(a, [0, 1, 2, 3]);
        let b = DynArray::<i32>::try_from(&[5, 6][..]).unwrap();
        assert_eq!(b.capacity(), 2);
    }

    quickcheck! {
        fn sized_construction_has_requested_len(n: u16) -> bool {
            DynArray::<u8>::with_len(n as usize).unwrap().len() == n as usize
        }

        fn copy_equals_source_and_is_independent(values: Vec<i32>) -> bool {
            let a = DynArray::<i32>::from_slice(&values).unwrap();
            let mut b = a.clone();
            let equal = a == b;
            b.push(0).unwrap();
            equal && a == values[..]
        }

        fn shrink_then_grow_within_capacity_preserves_prefix(values: Vec<i32>, n1: usize, n2: usize) -> bool {
            let mut a = DynArray::<i32>::from_slice(&values).unwrap();
            let capacity = a.capacity();
            if capacity == 0 {
                return true
            }
            let (n1, n2) = (n1 % capacity, n2 % capacity + 1);
            let (n1, n2) = (n1.min(n2), n1.max(n2));
            a.resize(n2).unwrap();
            a.resize(n1).unwrap();
            a.capacity() == capacity && a.as_slice() == &values[..n1]
        }

        fn growth_past_capacity_doubles_and_preserves(values: Vec<i32>, extra: u8) -> bool {
            let mut a = DynArray::<i32>::from_slice(&values).unwrap();
            let old_capacity = a.capacity();
            if old_capacity == 0 {
                return true
            }
            let n = old_capacity + 1 + extra as usize;
            a.resize(n).unwrap();
            a.len() == n
                && a.capacity() >= (2 * old_capacity).max(n)
                && a.as_slice()[..values.len()] == values[..]
        }

        fn concat_places_operands_in_order(x: Vec<i32>, y: Vec<i32>) -> bool {
            let a = DynArray::<i32>::from_slice(&x).unwrap();
            let b = DynArray::<i32>::from_slice(&y).unwrap();
            let c = &a + &b;
            c.len() == a.len() + b.len()
                && (0..a.len()).all(|i| c[i] == a[i])
                && (0..b.len()).all(|j| c[a.len() + j] == b[j])
        }

        fn reverse_is_an_involution(values: Vec<i32>) -> bool {
            let a = DynArray::<i32>::from_slice(&values).unwrap();
            a.reversed().unwrap().reversed().unwrap() == a
        }
    }
}
