// Dyad laws - law checkers for the Either algebras
// Each law is a function that evaluates both sides of the law for concrete
// inputs and reports a `LawViolation` when they are not equivalent. The
// strategies module supplies proptest generators to drive the checkers.

pub mod compose;
pub mod config;
pub mod laws;
pub mod strategy;

use tracing::{debug, trace};

use dyad_classes::{Setoid, Show};
use dyad_error::{DyadError, Result};

// Re-export main types for convenient access
pub use compose::Compose;
pub use config::LawConfig;

/// Marker trait for values whose equivalence can be checked and reported
pub trait Observable: Setoid + Show + Clone {}

impl<T: Setoid + Show + Clone> Observable for T {}

/// Fail with a `LawViolation` unless `holds`
///
/// `context` renders the inputs and is only evaluated on failure.
pub fn ensure<C>(law: &'static str, holds: bool, context: C) -> Result<()>
where
    C: FnOnce() -> String,
{
    trace!(law, "checking law");
    if holds {
        return Ok(());
    }
    let details = context();
    debug!(law, %details, "law violated");
    Err(DyadError::law_violation(law, details))
}

/// Fail with a `LawViolation` unless both sides of a law are equivalent
pub fn ensure_equivalent<T>(law: &'static str, lhs: &T, rhs: &T) -> Result<()>
where
    T: Setoid + Show + ?Sized,
{
    ensure(law, lhs.equals(rhs), || {
        format!("{} is not equivalent to {}", lhs.show(), rhs.show())
    })
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
