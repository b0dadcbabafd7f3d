use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::ensure_equivalent;

/// `w.extend(g).extend(f)` is equivalent to `w.extend(|x| f(&x.extend(g)))`
pub fn associativity<E, B, C, D, F, G>(w: &Either<E, B>, f: F, g: G) -> Result<()>
where
    E: Setoid + Show + Clone,
    B: Clone,
    D: Setoid + Show,
    F: Fn(&Either<E, C>) -> D,
    G: Fn(&Either<E, B>) -> C,
{
    let lhs = w.clone().extend(&g).extend(&f);
    let rhs = w.clone().extend(|x: &Either<E, B>| f(&x.clone().extend(&g)));
    ensure_equivalent("Extend.associativity", &lhs, &rhs)
}
