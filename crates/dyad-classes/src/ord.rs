// Ord.rs - Total ordering as a capability
// The ordering must agree with `Setoid`: two values that are `lte` each
// other are `equals`.

use crate::setoid::Setoid;

/// Trait for types with a total order consistent with their `Setoid`
///
/// Implementations must satisfy, for all `a`, `b` and `c`:
/// - totality: `a.lte(&b) || b.lte(&a)`
/// - antisymmetry: `a.lte(&b) && b.lte(&a)` implies `a.equals(&b)`
/// - transitivity: `a.lte(&b) && b.lte(&c)` implies `a.lte(&c)`
pub trait Ordered: Setoid {
    fn lte(&self, other: &Self) -> bool;
}

/// Dispatch to the `Ordered` capability of `x`
pub fn lte<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    x.lte(y)
}

macro_rules! impl_ordered_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn lte(&self, other: &Self) -> bool {
                    self <= other
                }
            }
        )*
    };
}

impl_ordered_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, str, (),
);

// NaN sorts first; -0 sorts before +0 so antisymmetry holds under SameValue.
macro_rules! impl_ordered_float {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                fn lte(&self, other: &Self) -> bool {
                    if self.is_nan() {
                        return true;
                    }
                    if other.is_nan() {
                        return false;
                    }
                    if self == other {
                        return self.is_sign_negative() || !other.is_sign_negative();
                    }
                    self < other
                }
            }
        )*
    };
}

impl_ordered_float!(f32, f64);

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    fn lte(&self, other: &Self) -> bool {
        (**self).lte(&**other)
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn lte(&self, other: &Self) -> bool {
        (**self).lte(&**other)
    }
}

// Lexicographic
impl<T: Ordered> Ordered for [T] {
    fn lte(&self, other: &Self) -> bool {
        for (x, y) in self.iter().zip(other) {
            if !x.equals(y) {
                return x.lte(y);
            }
        }
        self.len() <= other.len()
    }
}

impl<T: Ordered> Ordered for Vec<T> {
    fn lte(&self, other: &Self) -> bool {
        self.as_slice().lte(other.as_slice())
    }
}

impl<T: Ordered> Ordered for Option<T> {
    fn lte(&self, other: &Self) -> bool {
        match (self, other) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(x), Some(y)) => x.lte(y),
        }
    }
}

impl<A: Ordered, B: Ordered> Ordered for (A, B) {
    fn lte(&self, other: &Self) -> bool {
        if self.0.equals(&other.0) {
            self.1.lte(&other.1)
        } else {
            self.0.lte(&other.0)
        }
    }
}
