// Dyad - an immutable Either type with lawful algebraic operations
// This crate re-exports the public surface of the workspace crates.

pub use dyad_classes as classes;
pub use dyad_either::{lefts, partition, rights, Either, Left, Right, TYPE_IDENT};
pub use dyad_error::{DyadError, ErrorCode, ErrorDomain, Result};

#[cfg(feature = "laws")]
pub use dyad_laws as laws;

/// The traits needed to call every Either operation generically
pub mod prelude {
    pub use dyad_classes::{
        Alt, Applicative, Bifunctor, Chain, Extend, Foldable, Functor, Identity, Ordered,
        Semigroup, Setoid, Show, TypeIdent,
    };
    pub use dyad_either::{Either, Left, Right};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
