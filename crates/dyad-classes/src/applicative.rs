// Applicative.rs - Lifting plain values into a context

use crate::functor::Functor;

/// Trait for functors that can lift any value into their context
///
/// The implementing type acts as the type representative: `Vec::<()>::of(x)`
/// and `of::<Vec<()>, _>(x)` both build `vec![x]`.
pub trait Applicative: Functor {
    fn of<T>(value: T) -> Self::Target<T>;
}

/// Dispatch to the `Applicative` capability of the type representative `R`
pub fn of<R, T>(value: T) -> R::Target<T>
where
    R: Applicative,
{
    R::of(value)
}

impl<T> Applicative for Vec<T> {
    fn of<U>(value: U) -> Vec<U> {
        vec![value]
    }
}

impl<T> Applicative for Option<T> {
    fn of<U>(value: U) -> Option<U> {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_dispatch() {
        assert_eq!(of::<Vec<()>, _>(42), vec![42]);
        assert_eq!(of::<Option<()>, _>("x"), Some("x"));
    }
}
