use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `Either::of(x).chain(f)` is equivalent to `f(x)`
pub fn left_identity<E, B, C, F>(x: B, f: F) -> Result<()>
where
    E: Setoid + Show,
    B: Clone,
    C: Setoid + Show,
    F: Fn(B) -> Either<E, C>,
{
    let lhs = Either::<E, B>::of(x.clone()).chain(&f);
    ensure_equivalent("Monad.leftIdentity", &lhs, &f(x))
}

/// `m.chain(Either::of)` is equivalent to `m`
pub fn right_identity<E, B>(m: &Either<E, B>) -> Result<()>
where
    E: Observable,
    B: Observable,
{
    let lhs = m.clone().chain(Either::of);
    ensure_equivalent("Monad.rightIdentity", &lhs, m)
}
