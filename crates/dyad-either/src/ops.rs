// Ops.rs - The structural operations over Either
// Each operation is a single case analysis. Left short-circuits everything
// except `bimap`, `map_left`, `either` and `concat`.

use dyad_classes::{Applicative, Ordered, Semigroup, Setoid};

use crate::either::Either::{self, Left, Right};

impl<A, B> Either<A, B> {
    /// Structural equality: same case and equal payloads under `Setoid`
    ///
    /// ```
    /// use dyad_either::Either::{Left, Right};
    ///
    /// assert!(Right::<i32, _>(vec![1, 2, 3]).equals(&Right(vec![1, 2, 3])));
    /// assert!(!Right::<_, Vec<i32>>(vec![1, 2, 3]).equals(&Left(vec![1, 2, 3])));
    /// ```
    pub fn equals(&self, other: &Self) -> bool
    where
        A: Setoid,
        B: Setoid,
    {
        match (self, other) {
            (Left(x), Left(y)) => x.equals(y),
            (Right(x), Right(y)) => x.equals(y),
            _ => false,
        }
    }

    /// Any Left is ordered before any Right; same cases compare payloads
    pub fn lte(&self, other: &Self) -> bool
    where
        A: Ordered,
        B: Ordered,
    {
        match (self, other) {
            (Left(x), Left(y)) => x.lte(y),
            (Right(x), Right(y)) => x.lte(y),
            (Left(_), Right(_)) => true,
            (Right(_), Left(_)) => false,
        }
    }

    /// Concatenate payloads of matching cases; otherwise the Right wins
    ///
    /// ```
    /// use dyad_either::Either::{self, Left, Right};
    ///
    /// let abc: Either<String, Vec<i32>> = Left("abc".to_string());
    /// assert_eq!(abc.clone().concat(Left("def".to_string())), Left("abcdef".to_string()));
    /// assert_eq!(abc.concat(Right(vec![1])), Right(vec![1]));
    /// ```
    pub fn concat(self, other: Self) -> Self
    where
        A: Semigroup,
        B: Semigroup,
    {
        match (self, other) {
            (Left(x), Left(y)) => Left(x.concat(y)),
            (Right(x), Right(y)) => Right(x.concat(y)),
            (Left(_), right) => right,
            (right, Left(_)) => right,
        }
    }

    /// Apply `f` to a Right payload; a Left is returned untouched
    pub fn map<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Left(a) => Left(a),
            Right(b) => Right(f(b)),
        }
    }

    /// Apply `f` to a Left payload; a Right is returned untouched
    pub fn map_left<C, F>(self, f: F) -> Either<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Left(a) => Left(f(a)),
            Right(b) => Right(b),
        }
    }

    /// Map both cases; exactly one of the functions is invoked
    pub fn bimap<C, D, F, G>(self, f: F, g: G) -> Either<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match self {
            Left(a) => Left(f(a)),
            Right(b) => Right(g(b)),
        }
    }

    /// Apply the function held by `other` to this value
    ///
    /// A Left in `other` wins over anything in `self`. A Right function over a
    /// Left `self` yields `self`.
    ///
    /// ```
    /// use dyad_either::Either::{self, Left, Right};
    ///
    /// let sqrt: Either<&str, fn(f64) -> f64> = Right(f64::sqrt);
    /// assert_eq!(Right(9.0).ap(sqrt), Right(3.0));
    /// assert_eq!(Left("Cannot divide by zero").ap(sqrt), Left("Cannot divide by zero"));
    /// assert_eq!(Right(9.0).ap(Left::<_, fn(f64) -> f64>("No such function")), Left("No such function"));
    /// ```
    pub fn ap<C, F>(self, other: Either<A, F>) -> Either<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match other {
            Left(a) => Left(a),
            Right(f) => self.map(f),
        }
    }

    /// Monadic bind: feed a Right payload to `f`, short-circuit on Left
    ///
    /// ```
    /// use dyad_either::Either::{self, Left, Right};
    ///
    /// let sqrt = |n: f64| if n < 0.0 { Left("negative") } else { Right(n.sqrt()) };
    /// assert_eq!(Right(25.0).chain(sqrt), Right(5.0));
    /// assert_eq!(Right(-1.0).chain(sqrt), Left("negative"));
    /// ```
    pub fn chain<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(B) -> Either<A, C>,
    {
        match self {
            Left(a) => Left(a),
            Right(b) => f(b),
        }
    }

    /// `self` if it is a Right, otherwise `other`
    pub fn alt(self, other: Self) -> Self {
        match self {
            Left(_) => other,
            right => right,
        }
    }

    /// Fold the Right payload into `initial`; a Left yields `initial`
    pub fn reduce<C, F>(self, f: F, initial: C) -> C
    where
        F: FnOnce(C, B) -> C,
    {
        match self {
            Left(_) => initial,
            Right(b) => f(initial, b),
        }
    }

    /// Traverse with the applicative returned by `f`
    ///
    /// The applicative's type acts as the type representative. A Left is
    /// lifted with `F::of` without invoking `f`; a Right payload is passed to
    /// `f` and `Right` is mapped over the result.
    ///
    /// ```
    /// use dyad_either::Either::{self, Left, Right};
    ///
    /// let words = |s: &'static str| s.split(' ').collect::<Vec<_>>();
    /// assert_eq!(Right::<(), _>("foo bar").traverse(words), vec![Right("foo"), Right("bar")]);
    /// assert_eq!(Left::<_, &str>("failed").traverse(words), vec![Left("failed")]);
    /// ```
    pub fn traverse<F, C, G>(self, f: G) -> F::Target<Either<A, C>>
    where
        F: Applicative<Item = C>,
        G: FnOnce(B) -> F,
    {
        match self {
            Left(a) => F::of(Left(a)),
            Right(b) => f(b).map(Right),
        }
    }

    /// Apply `f` to the whole of a Right; a Left is returned untouched
    pub fn extend<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(&Self) -> C,
    {
        match self {
            Left(a) => Left(a),
            right => {
                let value = f(&right);
                Right(value)
            }
        }
    }

    /// Case analysis: `f` for a Left payload, `g` for a Right payload
    pub fn either<C, F, G>(self, f: F, g: G) -> C
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> C,
    {
        match self {
            Left(a) => f(a),
            Right(b) => g(b),
        }
    }
}
