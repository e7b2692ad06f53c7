#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        size_of::<$t>()
    };
}

/// Implements several traits for one generic type.
///
/// Each trait is followed by `=>` and a braced impl body, and every entry ends with a
/// comma. References are written as `for &'a` and `for mut &'a`.
///
/// ```ignore
/// impl_traits! {
///     for DynArray<T, Pol: CapacityPolicy>
///     Deref => {
///         type Target = [T];
///         fn deref(&self) -> &[T] { self.as_slice() }
///     },
///     IntoIterator for &'arr => { /* .. */ },
/// }
/// ```
#[macro_export]
macro_rules! impl_traits {
    (
        for $type:ident<$($gen:ident $(: $bound:path)?),*>
        $trait:ident $(<$($trg:ty),+>)? $(for & $lt:lifetime)? $(for mut & $lt_mut:lifetime)? =>
            $body:tt
        , $($rest:tt)*
    ) => {
        impl<$($lt,)? $($lt_mut,)? $($gen $(: $bound)?),*> $trait $(<$($trg),+>)?
            for $(&$lt)? $(&$lt_mut mut)? $type<$($gen),*>
        $body

        $crate::impl_traits! {
            for $type<$($gen $(: $bound)?),*>
            $($rest)*
        }
    };
    (
        for $type:ident<$($gen:ident $(: $bound:path)?),*>
    ) => {};
}

macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "std")]
        {
            kasvu_log::trace!($($arg)+);
        }
    };
}

macro_rules! log_error {
    ($($arg:tt)+) => {
        #[cfg(feature = "std")]
        {
            kasvu_log::error!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {

    use core::ops::{Deref, Index};

    struct Wrapper<T>(Vec<T>);

    impl_traits! {
        for Wrapper<T: Clone>
        Deref => {
            type Target = [T];

            fn deref(&self) -> &[T] {
                &self.0
            }
        },
        Index<usize> => {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.0[index]
            }
        },
        IntoIterator for &'w => {
            type Item = &'w T;
            type IntoIter = core::slice::Iter<'w, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        },
    }

    #[test]
    fn every_listed_trait_is_implemented() {
        let w = Wrapper(vec![1, 2, 3]);
        assert_eq!(w.len(), 3);
        assert_eq!(w[1], 2);
        assert_eq!((&w).into_iter().sum::<i32>(), 6);
    }
}
