use std::boxed::Box;

use quickcheck::{Arbitrary, Gen};

use crate::Frac;

/// Generates raw fractions: unreduced, with any sign and possibly a zero
/// denominator.
impl<T: Arbitrary> Arbitrary for Frac<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Frac::new_raw(T::arbitrary(g), T::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let pair = (self.numer().clone(), self.denom().clone());
        Box::new(pair.shrink().map(|(numer, denom)| Frac::new_raw(numer, denom)))
    }
}
