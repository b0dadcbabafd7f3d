use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `u.map(|x| x)` is equivalent to `u`
pub fn identity<A, B>(u: &Either<A, B>) -> Result<()>
where
    A: Observable,
    B: Observable,
{
    ensure_equivalent("Functor.identity", &u.clone().map(|x| x), u)
}

/// `u.map(|x| g(f(x)))` is equivalent to `u.map(f).map(g)`
pub fn composition<A, B, C, D, F, G>(u: &Either<A, B>, f: F, g: G) -> Result<()>
where
    A: Observable,
    B: Clone,
    D: Setoid + Show,
    F: Fn(B) -> C,
    G: Fn(C) -> D,
{
    let lhs = u.clone().map(|x| g(f(x)));
    let rhs = u.clone().map(&f).map(&g);
    ensure_equivalent("Functor.composition", &lhs, &rhs)
}
