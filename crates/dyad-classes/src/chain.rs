// Chain.rs - Sequencing dependent computations

use crate::functor::Functor;

/// Trait for functors supporting monadic bind
///
/// Implementations must satisfy associativity:
/// `m.chain(f).chain(g)` is equivalent to `m.chain(|x| f(x).chain(g))`
pub trait Chain: Functor {
    fn chain<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(Self::Item) -> Self::Target<U>;
}

/// Dispatch to the `Chain` capability of `x`
pub fn chain<T, U, F>(f: F, x: T) -> T::Target<U>
where
    T: Chain,
    F: FnMut(T::Item) -> T::Target<U>,
{
    x.chain(f)
}

impl<T> Chain for Vec<T> {
    fn chain<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> Vec<U>,
    {
        self.into_iter().flat_map(f).collect()
    }
}

impl<T> Chain for Option<T> {
    fn chain<U, F>(self, f: F) -> Option<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        self.and_then(f)
    }
}
