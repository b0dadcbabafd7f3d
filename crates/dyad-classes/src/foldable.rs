// Foldable.rs - Reducing a structure to a summary value

/// Trait for structures that can be folded from the left
///
/// Implementations must agree with folding the collected elements:
/// `u.reduce(f, x)` is equivalent to collecting `u` into a `Vec` and folding it
pub trait Foldable {
    type Item;

    fn reduce<C, F>(self, f: F, initial: C) -> C
    where
        F: FnMut(C, Self::Item) -> C;
}

/// Dispatch to the `Foldable` capability of `x`
pub fn reduce<T, C, F>(f: F, initial: C, x: T) -> C
where
    T: Foldable,
    F: FnMut(C, T::Item) -> C,
{
    x.reduce(f, initial)
}

impl<T> Foldable for Vec<T> {
    type Item = T;

    fn reduce<C, F>(self, f: F, initial: C) -> C
    where
        F: FnMut(C, T) -> C,
    {
        self.into_iter().fold(initial, f)
    }
}

impl<T> Foldable for Option<T> {
    type Item = T;

    fn reduce<C, F>(self, f: F, initial: C) -> C
    where
        F: FnMut(C, T) -> C,
    {
        self.into_iter().fold(initial, f)
    }
}
