use dyad_classes::{Ordered, Show};
use dyad_error::Result;

use crate::ensure;

/// `a.lte(b) || b.lte(a)`
pub fn totality<T: Ordered + Show>(a: &T, b: &T) -> Result<()> {
    ensure("Ord.totality", a.lte(b) || b.lte(a), || {
        format!("{} and {}", a.show(), b.show())
    })
}

/// `a.lte(b) && b.lte(a)` implies `a.equals(b)`
pub fn antisymmetry<T: Ordered + Show>(a: &T, b: &T) -> Result<()> {
    let holds = !(a.lte(b) && b.lte(a)) || a.equals(b);
    ensure("Ord.antisymmetry", holds, || format!("{} and {}", a.show(), b.show()))
}

/// `a.lte(b) && b.lte(c)` implies `a.lte(c)`
pub fn transitivity<T: Ordered + Show>(a: &T, b: &T, c: &T) -> Result<()> {
    let holds = !(a.lte(b) && b.lte(c)) || a.lte(c);
    ensure("Ord.transitivity", holds, || {
        format!("{}, {} and {}", a.show(), b.show(), c.show())
    })
}
