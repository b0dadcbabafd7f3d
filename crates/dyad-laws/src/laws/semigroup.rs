use dyad_classes::Semigroup;
use dyad_error::Result;

use crate::{ensure_equivalent, Observable};

/// `a.concat(b).concat(c)` is equivalent to `a.concat(b.concat(c))`
pub fn associativity<T: Semigroup + Observable>(a: &T, b: &T, c: &T) -> Result<()> {
    let lhs = a.clone().concat(b.clone()).concat(c.clone());
    let rhs = a.clone().concat(b.clone().concat(c.clone()));
    ensure_equivalent("Semigroup.associativity", &lhs, &rhs)
}
