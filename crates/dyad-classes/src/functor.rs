// Functor.rs - Structure-preserving mapping as a capability
// A functor maps a function over the values it contains without changing its
// shape. A bifunctor does the same over two independent type parameters.

/// Trait for containers that can map a function over their contents
///
/// Implementations must preserve identity and composition:
/// - `u.map(|x| x)` is equivalent to `u`
/// - `u.map(|x| g(f(x)))` is equivalent to `u.map(f).map(g)`
pub trait Functor {
    /// The type of the mapped-over values
    type Item;

    /// The same container holding values of type `U`
    type Target<U>;

    fn map<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(Self::Item) -> U;
}

/// Dispatch to the `Functor` capability of `x`
pub fn map<T, U, F>(f: F, x: T) -> T::Target<U>
where
    T: Functor,
    F: FnMut(T::Item) -> U,
{
    x.map(f)
}

/// Trait for containers that can map over two type parameters
///
/// Implementations must preserve identity and composition on both sides:
/// - `p.bimap(|a| a, |b| b)` is equivalent to `p`
/// - `p.bimap(|a| f(g(a)), |b| h(i(b)))` is equivalent to `p.bimap(g, i).bimap(f, h)`
pub trait Bifunctor {
    type LeftItem;
    type RightItem;

    /// The same container with both parameters replaced
    type Target<C, D>;

    fn bimap<C, D, F, G>(self, f: F, g: G) -> Self::Target<C, D>
    where
        F: FnOnce(Self::LeftItem) -> C,
        G: FnOnce(Self::RightItem) -> D;
}

/// Dispatch to the `Bifunctor` capability of `x`
pub fn bimap<T, C, D, F, G>(f: F, g: G, x: T) -> T::Target<C, D>
where
    T: Bifunctor,
    F: FnOnce(T::LeftItem) -> C,
    G: FnOnce(T::RightItem) -> D,
{
    x.bimap(f, g)
}

impl<T> Functor for Vec<T> {
    type Item = T;
    type Target<U> = Vec<U>;

    fn map<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T> Functor for Option<T> {
    type Item = T;
    type Target<U> = Option<U>;

    fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnMut(T) -> U,
    {
        Option::map(self, f)
    }
}

impl<A, B> Bifunctor for (A, B) {
    type LeftItem = A;
    type RightItem = B;
    type Target<C, D> = (C, D);

    fn bimap<C, D, F, G>(self, f: F, g: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (f(self.0), g(self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_dispatch() {
        assert_eq!(map(|x: i32| x + 1, vec![1, 2, 3]), vec![2, 3, 4]);
        assert_eq!(map(|s: &str| s.len(), Some("abc")), Some(3));
        assert_eq!(map(|x: i32| x + 1, None::<i32>), None);
    }

    #[test]
    fn test_bimap_pair() {
        assert_eq!(bimap(|s: &str| s.len(), |n: i32| n * 2, ("abc", 21)), (3, 42));
    }
}
