use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::ensure_equivalent;

/// `m.chain(f).chain(g)` is equivalent to `m.chain(|x| f(x).chain(g))`
pub fn associativity<E, B, C, D, F, G>(m: &Either<E, B>, f: F, g: G) -> Result<()>
where
    E: Setoid + Show + Clone,
    B: Clone,
    D: Setoid + Show,
    F: Fn(B) -> Either<E, C>,
    G: Fn(C) -> Either<E, D>,
{
    let lhs = m.clone().chain(&f).chain(&g);
    let rhs = m.clone().chain(|x| f(x).chain(&g));
    ensure_equivalent("Chain.associativity", &lhs, &rhs)
}
