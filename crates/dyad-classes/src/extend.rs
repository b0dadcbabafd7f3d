// Extend.rs - Context-aware mapping
// The function receives the whole structure rather than a single value.

use crate::functor::Functor;

/// Trait for functors that can extend a computation over their whole context
///
/// Implementations must satisfy associativity:
/// `w.extend(g).extend(f)` is equivalent to `w.extend(|x| f(&x.clone().extend(g)))`
pub trait Extend: Functor {
    fn extend<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(&Self) -> U;
}

/// Dispatch to the `Extend` capability of `x`
pub fn extend<T, U, F>(f: F, x: T) -> T::Target<U>
where
    T: Extend,
    F: FnMut(&T) -> U,
{
    x.extend(f)
}
