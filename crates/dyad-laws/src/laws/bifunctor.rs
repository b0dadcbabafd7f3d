use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `p.bimap(|a| a, |b| b)` is equivalent to `p`
pub fn identity<A, B>(p: &Either<A, B>) -> Result<()>
where
    A: Observable,
    B: Observable,
{
    ensure_equivalent("Bifunctor.identity", &p.clone().bimap(|a| a, |b| b), p)
}

/// Mapping with composed functions is equivalent to mapping twice
pub fn composition<A, B, C, D, X, Y, F1, G1, F2, G2>(
    p: &Either<A, B>,
    f1: F1,
    g1: G1,
    f2: F2,
    g2: G2,
) -> Result<()>
where
    A: Clone,
    B: Clone,
    X: Setoid + Show,
    Y: Setoid + Show,
    F1: Fn(A) -> C,
    G1: Fn(B) -> D,
    F2: Fn(C) -> X,
    G2: Fn(D) -> Y,
{
    let lhs = p.clone().bimap(|a| f2(f1(a)), |b| g2(g1(b)));
    let rhs = p.clone().bimap(&f1, &g1).bimap(&f2, &g2);
    ensure_equivalent("Bifunctor.composition", &lhs, &rhs)
}
