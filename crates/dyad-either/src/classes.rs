// Classes.rs - Registration of Either with the dyad type classes
// Every impl delegates to the inherent operation of the same name, so the
// generic dispatch functions in dyad_classes reach the same code paths.

use std::fmt;

use dyad_classes::{
    Alt, Applicative, Bifunctor, Chain, Extend, Foldable, Functor, Ordered, Semigroup, Setoid,
    Show, TypeIdent,
};

use crate::either::Either::{self, Left, Right};

/// Type identifier published for runtime discrimination
pub const TYPE_IDENT: &str = "dyad/Either";

impl<A, B> TypeIdent for Either<A, B> {
    const TYPE_IDENT: &'static str = TYPE_IDENT;
}

impl<A: Setoid, B: Setoid> Setoid for Either<A, B> {
    fn equals(&self, other: &Self) -> bool {
        Either::equals(self, other)
    }
}

impl<A: Ordered, B: Ordered> Ordered for Either<A, B> {
    fn lte(&self, other: &Self) -> bool {
        Either::lte(self, other)
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Either<A, B> {
    fn concat(self, other: Self) -> Self {
        Either::concat(self, other)
    }
}

impl<A: Show, B: Show> Show for Either<A, B> {
    fn show(&self) -> String {
        match self {
            Left(a) => format!("Left({})", a.show()),
            Right(b) => format!("Right({})", b.show()),
        }
    }
}

impl<A: Show, B: Show> fmt::Display for Either<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl<A: Show, B: Show> Either<A, B> {
    /// Debug rendering; identical to the `Display` output
    ///
    /// ```
    /// use dyad_either::Either::{Left, Right};
    ///
    /// assert_eq!(Left::<_, i32>("Cannot divide by zero").inspect(), "Left(\"Cannot divide by zero\")");
    /// assert_eq!(Right::<(), _>(vec![1, 2, 3]).inspect(), "Right([1, 2, 3])");
    /// ```
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl<A, B> Functor for Either<A, B> {
    type Item = B;
    type Target<U> = Either<A, U>;

    fn map<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        Either::map(self, f)
    }
}

impl<A, B> Bifunctor for Either<A, B> {
    type LeftItem = A;
    type RightItem = B;
    type Target<C, D> = Either<C, D>;

    fn bimap<C, D, F, G>(self, f: F, g: G) -> Self::Target<C, D>
    where
        F: FnOnce(Self::LeftItem) -> C,
        G: FnOnce(Self::RightItem) -> D,
    {
        Either::bimap(self, f, g)
    }
}

impl<A, B> Applicative for Either<A, B> {
    fn of<T>(value: T) -> Self::Target<T> {
        Right(value)
    }
}

impl<A, B> Chain for Either<A, B> {
    fn chain<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(Self::Item) -> Self::Target<U>,
    {
        Either::chain(self, f)
    }
}

impl<A, B> Alt for Either<A, B> {
    fn alt(self, other: Self) -> Self {
        Either::alt(self, other)
    }
}

impl<A, B> Foldable for Either<A, B> {
    type Item = B;

    fn reduce<C, F>(self, f: F, initial: C) -> C
    where
        F: FnMut(C, Self::Item) -> C,
    {
        Either::reduce(self, f, initial)
    }
}

impl<A, B> Extend for Either<A, B> {
    fn extend<U, F>(self, f: F) -> Self::Target<U>
    where
        F: FnMut(&Self) -> U,
    {
        Either::extend(self, f)
    }
}
