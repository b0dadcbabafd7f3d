use dyad_classes::{Functor, Identity};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Compose, Observable};

/// Applying a natural transformation after traversing is equivalent to
/// traversing with the transformation applied
///
/// The transformation used is `Identity<T> -> Vec<T>`.
pub fn naturality<A, B>(u: &Either<A, Identity<B>>) -> Result<()>
where
    A: Observable,
    B: Observable,
{
    let to_vec = |Identity(value): Identity<Either<A, B>>| vec![value];
    let lhs = to_vec(u.clone().traverse(|x: Identity<B>| x));
    let rhs = u.clone().traverse(|x: Identity<B>| vec![x.into_inner()]);
    ensure_equivalent("Traversable.naturality", &lhs, &rhs)
}

/// Traversing with `Identity` is equivalent to wrapping in `Identity`
pub fn identity<A, B>(u: &Either<A, B>) -> Result<()>
where
    A: Observable,
    B: Observable,
{
    let lhs = u.clone().traverse(Identity::<B>);
    ensure_equivalent("Traversable.identity", &lhs, &Identity(u.clone()))
}

/// Traversing with a composed applicative is equivalent to traversing with
/// each applicative in turn
pub fn composition<A, E, B>(u: &Either<A, Identity<Either<E, B>>>) -> Result<()>
where
    A: Observable,
    E: Observable,
    B: Observable,
{
    let lhs = u.clone().traverse(|x: Identity<Either<E, B>>| Compose(x));
    let rhs = Compose(
        u.clone()
            .traverse(|x: Identity<Either<E, B>>| x)
            .map(|inner: Either<A, Either<E, B>>| inner.traverse(|g: Either<E, B>| g)),
    );
    ensure_equivalent("Traversable.composition", &lhs, &rhs)
}
