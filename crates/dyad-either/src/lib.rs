// Either - an immutable disjoint union of a Left and a Right case
// This crate implements the Either type together with its law-abiding
// operations: equality, ordering, concatenation, mapping, application,
// chaining, choice, folding, traversal and extension. The operations are
// registered with the dyad type classes so generic code can dispatch to them.

pub mod either;
pub mod iter;

mod classes;
mod ops;

#[cfg(any(test, feature = "quickcheck"))]
mod arbitrary;

#[cfg(test)]
mod tests;

// Re-export main types for convenient access
pub use classes::TYPE_IDENT;
pub use either::{Either, Left, Right};
pub use iter::{lefts, partition, rights};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
