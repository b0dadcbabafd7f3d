// Type classes for the dyad workspace
// Capability traits that payload types may implement, together with free
// functions that dispatch to them. Container types register their operations
// by implementing these traits.

pub mod alt;
pub mod applicative;
pub mod chain;
pub mod extend;
pub mod foldable;
pub mod functor;
pub mod identity;
pub mod ord;
pub mod semigroup;
pub mod setoid;
pub mod show;
pub mod type_ident;

// Re-export main traits and dispatch functions
pub use alt::{alt, Alt};
pub use applicative::{of, Applicative};
pub use chain::{chain, Chain};
pub use extend::{extend, Extend};
pub use foldable::{reduce, Foldable};
pub use functor::{bimap, map, Bifunctor, Functor};
pub use identity::Identity;
pub use ord::{lte, Ordered};
pub use semigroup::{concat, Semigroup};
pub use setoid::{equals, Setoid};
pub use show::{show, Show};
pub use type_ident::{type_ident, TypeIdent};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
