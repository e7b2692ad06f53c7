use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Raw allocation seam used by [`DynArray`](crate::DynArray) buffers.
///
/// # Safety
/// Implementations must return memory valid for the requested layout, and
/// `free_raw` must only be called with pointers and sizes previously returned by
/// `allocate_raw` on the same allocator.
pub unsafe trait Allocator {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Returns `None` if the byte size of `count` elements overflows or the allocator
    /// fails.
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe { self.allocate_raw(layout.size(), layout.align()).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout.size(), layout.align()) }
    }
}
