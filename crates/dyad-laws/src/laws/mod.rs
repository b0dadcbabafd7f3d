// Law checkers, one module per algebra
// Laws over a single algebra are generic in the value type; laws that mix
// several capabilities are stated for `Either` directly.

pub mod alt;
pub mod applicative;
pub mod apply;
pub mod bifunctor;
pub mod chain;
pub mod extend;
pub mod foldable;
pub mod functor;
pub mod monad;
pub mod ord;
pub mod semigroup;
pub mod setoid;
pub mod traversable;
