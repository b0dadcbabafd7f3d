// Proptest strategies for dyad values

use proptest::prelude::*;

use dyad_classes::Identity;
use dyad_either::Either;

/// Either a Left drawn from `left` or a Right drawn from `right`, with equal weight
pub fn either<L, R>(left: L, right: R) -> impl Strategy<Value = Either<L::Value, R::Value>>
where
    L: Strategy,
    R: Strategy,
{
    prop_oneof![
        left.prop_map(Either::<L::Value, R::Value>::Left),
        right.prop_map(Either::<L::Value, R::Value>::Right),
    ]
}

/// Only Left values
pub fn left<L, B>(left: L) -> impl Strategy<Value = Either<L::Value, B>>
where
    L: Strategy,
    B: std::fmt::Debug,
{
    left.prop_map(Either::<L::Value, B>::Left)
}

/// Only Right values
pub fn right<A, R>(right: R) -> impl Strategy<Value = Either<A, R::Value>>
where
    A: std::fmt::Debug,
    R: Strategy,
{
    right.prop_map(Either::<A, R::Value>::Right)
}

/// Values from `inner` wrapped in `Identity`
pub fn identity<S>(inner: S) -> impl Strategy<Value = Identity<S::Value>>
where
    S: Strategy,
{
    inner.prop_map(Identity)
}
