// Setoid.rs - Value equality as a capability
// Equality here is value-based and recursive. It differs from `PartialEq` for
// floating point numbers, where SameValue semantics apply.

/// Trait for types with a law-abiding equivalence relation
///
/// Implementations must satisfy, for all `a`, `b` and `c`:
/// - reflexivity: `a.equals(&a)`
/// - symmetry: `a.equals(&b) == b.equals(&a)`
/// - transitivity: `a.equals(&b) && b.equals(&c)` implies `a.equals(&c)`
pub trait Setoid {
    fn equals(&self, other: &Self) -> bool;
}

/// Dispatch to the `Setoid` capability of `x`
pub fn equals<T: Setoid + ?Sized>(x: &T, y: &T) -> bool {
    x.equals(y)
}

macro_rules! impl_setoid_via_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl Setoid for $t {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_setoid_via_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, str, (),
);

// SameValue: NaN equals NaN, and +0 is distinct from -0.
macro_rules! impl_setoid_float {
    ($($t:ty),*) => {
        $(
            impl Setoid for $t {
                fn equals(&self, other: &Self) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return self.is_nan() && other.is_nan();
                    }
                    self == other && self.is_sign_negative() == other.is_sign_negative()
                }
            }
        )*
    };
}

impl_setoid_float!(f32, f64);

impl<T: Setoid + ?Sized> Setoid for Box<T> {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Setoid + ?Sized> Setoid for &T {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(&**other)
    }
}

impl<T: Setoid> Setoid for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(x, y)| x.equals(y))
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Setoid> Setoid for Option<T> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(x), Some(y)) => x.equals(y),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Setoid, B: Setoid> Setoid for (A, B) {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0) && self.1.equals(&other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_same_value() {
        assert!(f64::NAN.equals(&f64::NAN));
        assert!(!0.0f64.equals(&-0.0));
        assert!(!(-0.0f64).equals(&0.0));
        assert!((-0.0f64).equals(&-0.0));
        assert!(1.5f64.equals(&1.5));
        assert!(!1.0f64.equals(&f64::NAN));
        assert!(f32::NAN.equals(&f32::NAN));
    }

    #[test]
    fn test_recursive_equality() {
        assert!(equals(&vec![1, 2, 3], &vec![1, 2, 3]));
        assert!(!equals(&vec![1, 2, 3], &vec![1, 2]));
        assert!(equals(&vec![f64::NAN], &vec![f64::NAN]));
        assert!(equals(&Some("abc".to_string()), &Some("abc".to_string())));
        assert!(!equals(&Some(1), &None));
        assert!(equals(&(1, "x"), &(1, "x")));
        assert!(equals("abc", "abc"));
    }
}
