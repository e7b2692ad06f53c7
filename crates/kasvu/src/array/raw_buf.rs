use core::{
    marker::PhantomData,
    ptr::NonNull,
};

use crate::{
    allocator::Allocator,
    errors::CapacityError,
    Result,
    global_alloc::GLOBAL_ALLOC,
};

/// Exclusive owner of one allocation of `capacity` slots.
///
/// Dropping a `RawBuf` releases the allocation but never drops the elements in it.
/// Zero-sized element types are never allocated, and a capacity of zero means no
/// allocation.
pub(crate) struct RawBuf<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    pub fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 || size_of::<T>() == 0 {
            return Ok(Self {
                data: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            })
        }
        let data = unsafe { GLOBAL_ALLOC.allocate_uninit::<T>(capacity) };
        match data {
            Some(data) => Ok(Self {
                data,
                capacity,
                _marker: PhantomData,
            }),
            None => {
                log_error!(
                    "failed to allocate {} elements of {}",
                    capacity, core::any::type_name::<T>(),
                );
                Err(CapacityError::AllocFailed { new_capacity: capacity })
            },
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn ptr(&self) -> NonNull<T> {
        self.data
    }
}

impl<T> Drop for RawBuf<T> {

    fn drop(&mut self) {
        if self.capacity == 0 || size_of::<T>() == 0 {
            return
        }
        unsafe { GLOBAL_ALLOC.free_uninit(self.data, self.capacity) }
    }
}
