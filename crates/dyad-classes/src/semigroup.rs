// Semigroup.rs - Associative combination as a capability

/// Trait for types with an associative binary operation
///
/// Implementations must satisfy associativity:
/// `a.concat(b).concat(c)` is equivalent to `a.concat(b.concat(c))`
pub trait Semigroup {
    fn concat(self, other: Self) -> Self;
}

/// Dispatch to the `Semigroup` capability of `x`
pub fn concat<T: Semigroup>(x: T, y: T) -> T {
    x.concat(y)
}

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` acts as the identity element
impl<T: Semigroup> Semigroup for Option<T> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Some(x), Some(y)) => Some(x.concat(y)),
            (Some(x), None) => Some(x),
            (None, other) => other,
        }
    }
}

impl Semigroup for () {
    fn concat(self, _other: Self) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat() {
        assert_eq!(concat("abc".to_string(), "def".to_string()), "abcdef");
        assert_eq!(concat(vec![1, 2], vec![3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(concat(Some("a".to_string()), None), Some("a".to_string()));
        assert_eq!(concat(None, Some(vec![1])), Some(vec![1]));
        assert_eq!(concat(Some(vec![1]), Some(vec![2])), Some(vec![1, 2]));
    }
}
