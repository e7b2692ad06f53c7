//! Growth strategies for [`DynArray`](crate::DynArray).

/// Decides the capacity of a new buffer when the current one is too small.
pub trait CapacityPolicy {

    /// Returns `None` if `current` already covers `required`.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Doubles the capacity, or jumps straight to the required size if that is larger.
///
/// The first allocation of an empty array is exact.
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else if current == 0 { Some(required) }
        else {
            Some(current
                .checked_mul(2)
                .map_or(required, |doubled| doubled.max(required))
            )
        }
    }
}

/// Always grows to exactly the required size.
pub struct Exact {}

impl CapacityPolicy for Exact {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required) }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn doubling_is_exact_from_empty() {
        assert_eq!(Doubling::grow(0, 5), Some(5));
        assert_eq!(Doubling::grow(0, 0), None);
    }

    #[test]
    fn doubling_takes_larger_of_double_and_required() {
        assert_eq!(Doubling::grow(4, 5), Some(8));
        assert_eq!(Doubling::grow(4, 20), Some(20));
        assert_eq!(Doubling::grow(4, 4), None);
        assert_eq!(Doubling::grow(8, 3), None);
    }

    #[test]
    fn doubling_falls_back_to_required_on_overflow() {
        let current = usize::MAX / 2 + 1;
        assert_eq!(Doubling::grow(current, current + 1), Some(current + 1));
    }

    #[test]
    fn exact_never_over_allocates() {
        assert_eq!(Exact::grow(4, 5), Some(5));
        assert_eq!(Exact::grow(5, 5), None);
    }
}
