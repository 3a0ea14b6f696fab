use crate::signature::{
    scheme::SignatureScheme,
    utils::{errors::SignatureError, hash::hash_to_field}
};
use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::{PrimeField, UniformRand};
use ark_serialize::CanonicalSerialize;
use rand::Rng;
use srs::SRS;
use std::fmt::Debug;


pub mod srs;

const PERSONALIZATION: &[u8] = b"SCHSIGNA";   // persona for the Schnorr signature scheme

// SchnorrSignature type wraps around the SRS and represents the scheme's
// system-wide parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SchnorrSignature<C: AffineCurve> {
    pub srs: SRS<C>,   // SRS for the Schnorr signature
}

impl<C: AffineCurve> SchnorrSignature<C> {

    // Challenge hash over the message, the generator and the nonce commitment.
    fn challenge(&self, message: &[u8], v_g: &C) -> Result<C::ScalarField, SignatureError> {
        let mut g_bytes = vec![];
        self.srs.g_public_key.serialize(&mut g_bytes)?;

        let mut v_g_bytes = vec![];
        v_g.serialize(&mut v_g_bytes)?;

        hash_to_field::<C::ScalarField>(
            PERSONALIZATION,
            &[message, &g_bytes, &v_g_bytes].concat(),
        )
    }
}

// SchnorrSignature implements the SignatureScheme trait.
impl<C: AffineCurve> SignatureScheme for SchnorrSignature<C> {
    type SRS = SRS<C>;                      // SRS for Schnorr is just a generator (i.e., an EC point)
    type Secret = C::ScalarField;           // secret keys are scalars from the field underlying C
    type PublicKey = C;                     // public keys are elliptic curve points
    type Signature = (C, C::ScalarField);   // signatures consist of an EC point and a scalar

    // Creates a SchnorrSignature from a given SRS.
    fn from_srs(srs: Self::SRS) -> Result<Self, SignatureError> {
        Ok(Self { srs })
    }

    // Samples a key pair using a specified RNG.
    fn generate_keypair<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::Secret, Self::PublicKey), SignatureError> {
        let sk = Self::Secret::rand(rng);
        Ok((sk, self.srs.g_public_key.mul(sk.into_repr()).into_affine()))
    }

    // Computes a key pair, given only the secret key.
    fn from_sk(
        &self,
        sk: &Self::Secret,
    ) -> Result<(Self::Secret, Self::PublicKey), SignatureError> {
        Ok((*sk, self.srs.g_public_key.mul(sk.into_repr()).into_affine()))
    }

    // Schnorr signing algorithm.
    fn sign<R: Rng>(
        &self,
        rng: &mut R,
        sk: &Self::Secret,
        message: &[u8],
    ) -> Result<Self::Signature, SignatureError> {

        // sample nonce and commit to it
        let v = C::ScalarField::rand(rng);
        let v_g = self.srs.g_public_key.mul(v.into_repr()).into_affine();

        let hashed_message = self.challenge(message, &v_g)?;

        // compute "response"
        let r = v - (*sk * hashed_message);

        Ok((v_g, r))
    }

    // Schnorr verification algorithm.
    // Verifies input signature on message, against public_key.
    fn verify(
        &self,
        pk: &Self::PublicKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<(), SignatureError> {
        let hashed_message = self.challenge(message, &signature.0)?;

        // g*r + pk*c == g*v
        let check = (self.srs.g_public_key.mul(signature.1.into_repr())
            + pk.mul(hashed_message.into_repr()))
            .into_affine();

        if check != signature.0 {
            return Err(SignatureError::SchnorrVerify);
        }

        Ok(())
    }
}


/* Unit tests: */
