use crate::{
    signature::scheme::SignatureScheme,
    vss::{errors::VSSError, suite::Suite},
    Scalar,
};

use ark_ec::AffineCurve;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};

use rand::Rng;

// Long-term key pair of a participant: public = base * secret.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct KeyPair<C: AffineCurve> {
    pub secret: Scalar<C>,
    pub public: C,
}

impl<C: AffineCurve> KeyPair<C> {

    pub fn generate<R: Rng>(suite: &Suite<C>, rng: &mut R) -> Result<Self, VSSError> {
        let (secret, public) = suite.signature_scheme()?.generate_keypair(rng)?;
        Ok(Self { secret, public })
    }

    pub fn from_secret(suite: &Suite<C>, secret: Scalar<C>) -> Result<Self, VSSError> {
        let (secret, public) = suite.signature_scheme()?.from_sk(&secret)?;
        Ok(Self { secret, public })
    }
}


#[cfg(test)]
mod test {
    use crate::{
        signature::utils::tests::check_serialization,
        vss::{keys::KeyPair, suite::Suite},
    };

    use ark_bls12_381::G1Affine as C;
    use ark_ec::{AffineCurve, ProjectiveCurve};
    use ark_ff::PrimeField;
    use rand::thread_rng;

    #[test]
    fn test_generate_and_rebuild() {
        let rng = &mut thread_rng();
        let suite = Suite::<C>::setup();
        let key = KeyPair::generate(&suite, rng).unwrap();

        assert_eq!(key.public, suite.base().mul(key.secret.into_repr()).into_affine());
        assert_eq!(KeyPair::from_secret(&suite, key.secret).unwrap(), key);
        check_serialization(key);
    }

    #[test]
    fn test_keys_follow_suite_base() {
        let rng = &mut thread_rng();
        let suite = Suite::<C>::setup();
        let other = Suite::from_generator(suite.base().mul(suite.random_scalar(rng).into_repr()).into_affine());
        let key = KeyPair::generate(&suite, rng).unwrap();

        assert_ne!(KeyPair::from_secret(&other, key.secret).unwrap(), key);
    }
}
