use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::ensure_equivalent;

/// `v.ap(u.ap(a.map(compose)))` is equivalent to `v.ap(u).ap(a)`
///
/// `a` holds the outer function and `u` the inner one.
pub fn composition<E, B, C, D, F, G>(
    v: &Either<E, B>,
    u: &Either<E, G>,
    a: &Either<E, F>,
) -> Result<()>
where
    E: Setoid + Show + Clone,
    B: Clone,
    D: Setoid + Show,
    F: Fn(C) -> D + Clone,
    G: Fn(B) -> C + Clone,
{
    let composed = a.clone().map(|f: F| move |g: G| move |x: B| f(g(x)));
    let lhs = v.clone().ap(u.clone().ap(composed));
    let rhs = v.clone().ap(u.clone()).ap(a.clone());
    ensure_equivalent("Apply.composition", &lhs, &rhs)
}
