use super::{errors::VSSError, suite::Suite};
use ark_ec::AffineCurve;

/* PolyInfo holds the parameters every dealer and receiver of a sharing round
   agree on: t shares reconstruct the secret, a promise needs r valid responses
   to be certified, and n participants take part (the share matrix is n x n).
*/

#[derive(Clone, Debug, PartialEq)]
pub struct PolyInfo<C: AffineCurve> {
    pub suite: Suite<C>,   // group the polynomials live in
    pub t: usize,          // reconstruction threshold
    pub r: usize,          // certification threshold
    pub n: usize,          // number of participants
}

impl<C: AffineCurve> PolyInfo<C> {

    pub fn new(suite: Suite<C>, t: usize, r: usize, n: usize) -> Result<Self, VSSError> {
        check_thresholds(t, r, n)?;
        Ok(Self { suite, t, r, n })
    }
}

// Ensures 1 <= t <= r <= n.
pub fn check_thresholds(t: usize, r: usize, n: usize) -> Result<(), VSSError> {
    if t < 1 || t > r || r > n {
        return Err(VSSError::InvalidConfig(t, r, n));
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use crate::vss::{config::PolyInfo, errors::VSSError, suite::Suite};
    use ark_bls12_381::G1Affine;

    #[test]
    fn test_valid_thresholds() {
        let suite = Suite::<G1Affine>::setup();
        assert!(PolyInfo::new(suite, 1, 1, 1).is_ok());
        assert!(PolyInfo::new(suite, 2, 3, 3).is_ok());
        assert!(PolyInfo::new(suite, 3, 3, 5).is_ok());
    }

    #[test]
    fn test_invalid_thresholds() {
        let suite = Suite::<G1Affine>::setup();
        for (t, r, n) in [(0, 1, 1), (3, 2, 3), (2, 4, 3)].iter() {
            match PolyInfo::new(suite, *t, *r, *n) {
                Err(VSSError::InvalidConfig(a, b, c)) => assert_eq!((a, b, c), (*t, *r, *n)),
                _ => panic!("t={}, r={}, n={} should be rejected", t, r, n),
            }
        }
    }
}
