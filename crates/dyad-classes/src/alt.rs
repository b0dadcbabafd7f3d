// Alt.rs - Choice between two alternatives

use crate::functor::Functor;

/// Trait for functors with an associative choice operation
///
/// Implementations must satisfy:
/// - associativity: `a.alt(b).alt(c)` is equivalent to `a.alt(b.alt(c))`
/// - distributivity: `a.alt(b).map(f)` is equivalent to `a.map(f).alt(b.map(f))`
pub trait Alt: Functor {
    fn alt(self, other: Self) -> Self;
}

/// Dispatch to the `Alt` capability of `x`
pub fn alt<T: Alt>(x: T, y: T) -> T {
    x.alt(y)
}

impl<T> Alt for Vec<T> {
    fn alt(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Alt for Option<T> {
    fn alt(self, other: Self) -> Self {
        self.or(other)
    }
}
