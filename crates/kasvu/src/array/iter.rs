use core::{
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

/// Borrowing iterator over a [`DynArray`](crate::DynArray).
pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

/// Mutably borrowing iterator over a [`DynArray`](crate::DynArray).
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iter<'a, T> {

    /// # Safety
    /// `ptr` must point to `len` initialized elements that outlive `'a` and are not
    /// mutated during `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {

    /// # Safety
    /// `ptr` must point to `len` initialized elements that outlive `'a` and are not
    /// otherwise accessed during `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let item = unsafe { self.ptr.as_ref() };
        self.ptr = unsafe { self.ptr.add(1) };
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        self.remaining -= 1;
        Some(unsafe { self.ptr.add(self.remaining).as_ref() })
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let item = unsafe { self.ptr.as_mut() };
        self.ptr = unsafe { self.ptr.add(1) };
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        self.remaining -= 1;
        Some(unsafe { self.ptr.add(self.remaining).as_mut() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Clone for Iter<'_, T> {

    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {

    use crate::DynArray;

    #[test]
    fn meets_in_the_middle() {
        let arr: DynArray<i32> = (1..=5).collect();
        let mut iter = arr.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_rev_writes_every_slot() {
        let mut arr: DynArray<usize> = DynArray::with_len(4).unwrap();
        for (i, value) in arr.iter_mut().rev().enumerate() {
            *value = i;
        }
        assert_eq!(arr, [3, 2, 1, 0]);
    }

    #[test]
    fn zero_sized_elements_are_counted() {
        let arr: DynArray<()> = DynArray::with_len(7).unwrap();
        assert_eq!(arr.iter().count(), 7);
        assert_eq!(arr.iter().rev().count(), 7);
    }
}
