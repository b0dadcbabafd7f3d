use dyad_classes::{Setoid, Show};
use dyad_either::Either;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `v.ap(Either::of(|x| x))` is equivalent to `v`
pub fn identity<E, B>(v: &Either<E, B>) -> Result<()>
where
    E: Observable,
    B: Observable,
{
    let lhs = v.clone().ap(Either::<E, _>::of(|x: B| x));
    ensure_equivalent("Applicative.identity", &lhs, v)
}

/// `Either::of(x).ap(Either::of(f))` is equivalent to `Either::of(f(x))`
pub fn homomorphism<E, B, C, F>(x: B, f: F) -> Result<()>
where
    E: Setoid + Show,
    B: Clone,
    C: Setoid + Show,
    F: Fn(B) -> C,
{
    let lhs = Either::<E, B>::of(x.clone()).ap(Either::of(&f));
    let rhs = Either::<E, C>::of(f(x));
    ensure_equivalent("Applicative.homomorphism", &lhs, &rhs)
}

/// `Either::of(y).ap(u)` is equivalent to `u.ap(Either::of(|f| f(y)))`
pub fn interchange<E, B, C, F>(u: &Either<E, F>, y: B) -> Result<()>
where
    E: Setoid + Show + Clone,
    B: Clone,
    C: Setoid + Show,
    F: Fn(B) -> C + Clone,
{
    let lhs = Either::<E, B>::of(y.clone()).ap(u.clone());
    let rhs = u.clone().ap(Either::<E, _>::of(move |f: F| f(y)));
    ensure_equivalent("Applicative.interchange", &lhs, &rhs)
}
