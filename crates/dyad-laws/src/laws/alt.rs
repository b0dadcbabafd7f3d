use dyad_classes::{Alt, Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `a.alt(b).alt(c)` is equivalent to `a.alt(b.alt(c))`
pub fn associativity<T: Alt + Observable>(a: &T, b: &T, c: &T) -> Result<()> {
    let lhs = a.clone().alt(b.clone()).alt(c.clone());
    let rhs = a.clone().alt(b.clone().alt(c.clone()));
    ensure_equivalent("Alt.associativity", &lhs, &rhs)
}

/// `a.alt(b).map(f)` is equivalent to `a.map(f).alt(b.map(f))`
pub fn distributivity<E, B, C, F>(a: &Either<E, B>, b: &Either<E, B>, f: F) -> Result<()>
where
    E: Setoid + Show + Clone,
    B: Clone,
    C: Setoid + Show,
    F: Fn(B) -> C,
{
    let lhs = a.clone().alt(b.clone()).map(&f);
    let rhs = a.clone().map(&f).alt(b.clone().map(&f));
    ensure_equivalent("Alt.distributivity", &lhs, &rhs)
}
