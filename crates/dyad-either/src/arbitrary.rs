// Arbitrary Either values for quickcheck
// The case is chosen uniformly; shrinking stays within the chosen case.

use quickcheck::{Arbitrary, Gen};

use crate::either::Either::{self, Left, Right};

impl<A: Arbitrary, B: Arbitrary> Arbitrary for Either<A, B> {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Left(A::arbitrary(g))
        } else {
            Right(B::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Left(a) => Box::new(a.shrink().map(Either::<A, B>::Left)),
            Right(b) => Box::new(b.shrink().map(Either::<A, B>::Right)),
        }
    }
}
