use dyad_classes::{Setoid, Show};
use dyad_error::Result;

use crate::ensure;

/// `a.equals(a)`
pub fn reflexivity<T: Setoid + Show>(a: &T) -> Result<()> {
    ensure("Setoid.reflexivity", a.equals(a), || a.show())
}

/// `a.equals(b) == b.equals(a)`
pub fn symmetry<T: Setoid + Show>(a: &T, b: &T) -> Result<()> {
    ensure("Setoid.symmetry", a.equals(b) == b.equals(a), || {
        format!("{} and {}", a.show(), b.show())
    })
}

/// `a.equals(b) && b.equals(c)` implies `a.equals(c)`
pub fn transitivity<T: Setoid + Show>(a: &T, b: &T, c: &T) -> Result<()> {
    let holds = !(a.equals(b) && b.equals(c)) || a.equals(c);
    ensure("Setoid.transitivity", holds, || {
        format!("{}, {} and {}", a.show(), b.show(), c.show())
    })
}
