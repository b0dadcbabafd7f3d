// Iteration helpers over collections of Either values

use crate::either::Either::{self, Left, Right};

/// Collect the Left payloads, in order
pub fn lefts<A, B, I>(items: I) -> Vec<A>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    items.into_iter().filter_map(Either::left).collect()
}

/// Collect the Right payloads, in order
pub fn rights<A, B, I>(items: I) -> Vec<B>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    items.into_iter().filter_map(Either::right).collect()
}

/// Split into Left payloads and Right payloads, preserving order within each
pub fn partition<A, B, I>(items: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = Either<A, B>>,
{
    let mut left_values = Vec::new();
    let mut right_values = Vec::new();
    for item in items {
        match item {
            Left(a) => left_values.push(a),
            Right(b) => right_values.push(b),
        }
    }
    (left_values, right_values)
}
