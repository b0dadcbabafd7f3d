use dyad_classes::{Foldable, Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::ensure_equivalent;

/// Reducing directly is equivalent to collecting into a `Vec` and reducing that
pub fn associativity<A, B, C, F>(u: &Either<A, B>, f: F, x: C) -> Result<()>
where
    A: Clone,
    B: Clone,
    C: Setoid + Show + Clone,
    F: Fn(C, B) -> C,
{
    let lhs = u.clone().reduce(&f, x.clone());
    let collected = u.clone().reduce(
        |mut acc: Vec<B>, b| {
            acc.push(b);
            acc
        },
        Vec::new(),
    );
    let rhs = Foldable::reduce(collected, &f, x);
    ensure_equivalent("Foldable.associativity", &lhs, &rhs)
}
