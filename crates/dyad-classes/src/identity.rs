// Identity.rs - The identity functor
// A transparent wrapper carrying exactly one value. It is the simplest
// applicative and serves as the reference context for traversal laws.

use std::fmt;

use crate::{
    applicative::Applicative, chain::Chain, extend::Extend, foldable::Foldable,
    functor::Functor, ord::Ordered, semigroup::Semigroup, setoid::Setoid, show::Show,
    type_ident::TypeIdent,
};

/// A container holding a single value with no additional context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    pub fn new(value: T) -> Self {
        Identity(value)
    }

    /// Unwrap the contained value
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn value(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Identity<T> {
    fn from(value: T) -> Self {
        Identity(value)
    }
}

impl<T> TypeIdent for Identity<T> {
    const TYPE_IDENT: &'static str = "dyad/Identity";
}

impl<T: Setoid> Setoid for Identity<T> {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl<T: Ordered> Ordered for Identity<T> {
    fn lte(&self, other: &Self) -> bool {
        self.0.lte(&other.0)
    }
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn concat(self, other: Self) -> Self {
        Identity(self.0.concat(other.0))
    }
}

impl<T: Show> Show for Identity<T> {
    fn show(&self) -> String {
        format!("Identity({})", self.0.show())
    }
}

impl<T: Show> fmt::Display for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl<T> Functor for Identity<T> {
    type Item = T;
    type Target<U> = Identity<U>;

    fn map<U, F>(self, mut f: F) -> Identity<U>
    where
        F: FnMut(T) -> U,
    {
        Identity(f(self.0))
    }
}

impl<T> Applicative for Identity<T> {
    fn of<U>(value: U) -> Identity<U> {
        Identity(value)
    }
}

impl<T> Chain for Identity<T> {
    fn chain<U, F>(self, mut f: F) -> Identity<U>
    where
        F: FnMut(T) -> Identity<U>,
    {
        f(self.0)
    }
}

impl<T> Foldable for Identity<T> {
    type Item = T;

    fn reduce<C, F>(self, mut f: F, initial: C) -> C
    where
        F: FnMut(C, T) -> C,
    {
        f(initial, self.0)
    }
}

impl<T> Extend for Identity<T> {
    fn extend<U, F>(self, mut f: F) -> Identity<U>
    where
        F: FnMut(&Self) -> U,
    {
        Identity(f(&self))
    }
}
