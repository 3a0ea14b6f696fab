use crate::{
    signature::{
        scheme::SignatureScheme,
        schnorr::{SchnorrSignature, srs::SRS},
        utils::hash::hash_to_field,
    },
    vss::errors::VSSError,
    Scalar,
};

use ark_ec::AffineCurve;
use ark_ff::{UniformRand, Zero};

use rand::Rng;

/* Suite bundles the group capabilities every protocol object needs: a base
   point, fresh random scalars and hashing into the scalar field. It is passed
   explicitly to every constructor. */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Suite<C: AffineCurve> {
    pub g: C,   // base point of the commitment group
}

impl<C: AffineCurve> Suite<C> {

    // Function setup uses the curve's prime subgroup generator as base point.
    pub fn setup() -> Self {
        Self { g: C::prime_subgroup_generator() }
    }

    pub fn from_generator(g: C) -> Self {
        Self { g }
    }

    pub fn base(&self) -> C {
        self.g
    }

    // Identity element of the group.
    pub fn zero(&self) -> C {
        C::zero()
    }

    pub fn random_scalar<R: Rng>(&self, rng: &mut R) -> Scalar<C> {
        Scalar::<C>::rand(rng)
    }

    // Personalization must be at most 8 bytes.
    pub fn hash_to_scalar(&self, personalization: &[u8], message: &[u8]) -> Result<Scalar<C>, VSSError> {
        Ok(hash_to_field::<Scalar<C>>(personalization, message)?)
    }

    // Schnorr scheme over the suite's base point, used to sign responses.
    pub fn signature_scheme(&self) -> Result<SchnorrSignature<C>, VSSError> {
        Ok(SchnorrSignature::from_srs(SRS::from_generator(self.g)?)?)
    }
}


/* Unit tests: */

#[cfg(test)]
mod test {
    use crate::{
        signature::scheme::SignatureScheme,
        vss::suite::Suite,
    };

    use ark_bls12_381::G1Affine as C;
    use ark_ec::{AffineCurve, ProjectiveCurve};
    use ark_ff::PrimeField;
    use rand::thread_rng;

    #[test]
    fn test_signature_scheme_uses_base() {
        let rng = &mut thread_rng();
        let suite = Suite::<C>::setup();
        let other = Suite::from_generator(suite.base().mul(suite.random_scalar(rng).into_repr()).into_affine());

        let scheme = suite.signature_scheme().unwrap();
        assert_eq!(scheme.srs.g_public_key, suite.base());

        let (sk, pk) = scheme.generate_keypair(rng).unwrap();
        assert_eq!(pk, suite.base().mul(sk.into_repr()).into_affine());

        let signature = scheme.sign(rng, &sk, b"message").unwrap();
        scheme.verify(&pk, b"message", &signature).unwrap();
        assert!(other.signature_scheme().unwrap().verify(&pk, b"message", &signature).is_err());
    }
}
