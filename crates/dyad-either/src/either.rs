// Either.rs - The Either type, its constructors and conversions
// A value of type `Either<A, B>` is definitively one of two cases: a Left
// holding an `A` or a Right holding a `B`. By convention Left carries a
// failure description and Right carries a success value.

use dyad_error::{DyadError, Result};

/// A disjoint union of two cases
///
/// Instances are never mutated by the operations in this crate: every
/// operation consumes its receiver and returns either a new instance or the
/// receiver itself.
///
/// The derived `PartialEq` and `Ord` follow plain Rust semantics. The
/// law-abiding equality used throughout dyad is [`Either::equals`], and the
/// law-abiding order is [`Either::lte`]. Both agree with the derived traits
/// except on floating point payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
pub enum Either<A, B> {
    /// Left variant
    Left(A),
    /// Right variant
    Right(B),
}

pub use Either::{Left, Right};

impl<A, B> Either<A, B> {
    /// Lift a value into a Right, the applicative unit of `Either`
    ///
    /// ```
    /// use dyad_either::Either;
    ///
    /// assert_eq!(Either::<String, i32>::of(42), Either::Right(42));
    /// ```
    #[inline]
    pub const fn of(value: B) -> Self {
        Either::Right(value)
    }

    /// `true` if this is a Left
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// `true` if this is a Right
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Convert the Left payload to `Option<A>`
    pub fn left(self) -> Option<A> {
        match self {
            Either::Left(a) => Some(a),
            Either::Right(_) => None,
        }
    }

    /// Convert the Right payload to `Option<B>`
    pub fn right(self) -> Option<B> {
        match self {
            Either::Left(_) => None,
            Either::Right(b) => Some(b),
        }
    }

    /// Extract the Left payload, failing with `ExpectedLeft` on a Right
    pub fn try_left(self) -> Result<A> {
        self.left().ok_or(DyadError::ExpectedLeft)
    }

    /// Extract the Right payload, failing with `ExpectedRight` on a Left
    pub fn try_right(self) -> Result<B> {
        self.right().ok_or(DyadError::ExpectedRight)
    }

    /// Borrow the payload
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Exchange the two cases
    pub fn swap(self) -> Either<B, A> {
        match self {
            Either::Left(a) => Either::Right(a),
            Either::Right(b) => Either::Left(b),
        }
    }

    /// Convert into a `Result`, with Right as `Ok` and Left as `Err`
    pub fn into_result(self) -> std::result::Result<B, A> {
        match self {
            Either::Left(a) => Err(a),
            Either::Right(b) => Ok(b),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the payload when both cases carry the same type
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(x) | Either::Right(x) => x,
        }
    }
}

impl<A, B> From<std::result::Result<B, A>> for Either<A, B> {
    fn from(result: std::result::Result<B, A>) -> Self {
        match result {
            Ok(b) => Either::Right(b),
            Err(a) => Either::Left(a),
        }
    }
}

impl<A, B> From<Either<A, B>> for std::result::Result<B, A> {
    fn from(either: Either<A, B>) -> Self {
        either.into_result()
    }
}
