#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    /// The allocator could not provide `new_capacity` elements, or their byte size
    /// does not fit in `isize`.
    AllocFailed {
        new_capacity: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
        }
    }
}

impl core::error::Error for CapacityError {}
