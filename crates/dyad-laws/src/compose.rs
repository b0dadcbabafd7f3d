// Compose - nesting of two applicatives as a single applicative
// Needed to state the composition law for traverse.

use std::fmt;

use dyad_classes::{Applicative, Functor, Setoid, Show};

/// `F<G<T>>` viewed as one applicative over `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compose<T>(pub T);

impl<T> Compose<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<F, G> Functor for Compose<F>
where
    F: Functor<Item = G>,
    G: Functor,
{
    type Item = G::Item;
    type Target<U> = Compose<F::Target<G::Target<U>>>;

    fn map<U, H>(self, mut h: H) -> Self::Target<U>
    where
        H: FnMut(Self::Item) -> U,
    {
        Compose(self.0.map(|inner: G| inner.map(&mut h)))
    }
}

impl<F, G> Applicative for Compose<F>
where
    F: Applicative<Item = G>,
    G: Applicative,
{
    fn of<T>(value: T) -> Self::Target<T> {
        Compose(F::of(G::of(value)))
    }
}

impl<T: Setoid> Setoid for Compose<T> {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl<T: Show> Show for Compose<T> {
    fn show(&self) -> String {
        format!("Compose({})", self.0.show())
    }
}

impl<T: Show> fmt::Display for Compose<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyad_classes::Identity;
    use dyad_either::{Either, Left, Right};

    type Nested = Compose<Identity<Either<String, i32>>>;

    #[test]
    fn test_map_reaches_innermost_value() {
        let nested: Nested = Compose(Identity(Right(20)));
        assert_eq!(nested.map(|x| x + 1), Compose(Identity(Right(21))));

        let failed: Nested = Compose(Identity(Left("e".to_string())));
        assert_eq!(failed.map(|x| x + 1), Compose(Identity(Left("e".to_string()))));
    }

    #[test]
    fn test_of_wraps_both_layers() {
        let lifted = <Nested as Applicative>::of(7u8);
        assert_eq!(lifted, Compose(Identity(Either::<String, u8>::Right(7))));
        assert_eq!(lifted.show(), "Compose(Identity(Right(7)))");
    }
}
