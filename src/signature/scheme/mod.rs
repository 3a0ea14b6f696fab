use crate::signature::utils::errors::SignatureError;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::Rng;
use std::fmt::Debug;

// Signature schemes used to authenticate responses must implement the
// SignatureScheme trait.
pub trait SignatureScheme: Debug + Clone + PartialEq + Sized {
    type SRS: Clone;                                                     // scheme's associated SRS
    type Secret;                                                         // type for secret keys
    type PublicKey: Clone + CanonicalSerialize + CanonicalDeserialize;   // type for public keys
    type Signature: Clone + CanonicalSerialize + CanonicalDeserialize;   // type for signatures

    // Function for setting parameters given an input SRS.
    fn from_srs(srs: Self::SRS) -> Result<Self, SignatureError>;

    // Method for generating a key pair by sampling an input RNG.
    fn generate_keypair<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::Secret, Self::PublicKey), SignatureError>;

    // Method for computing a key pair, given only the secret key.
    fn from_sk(&self, sk: &Self::Secret)
               -> Result<(Self::Secret, Self::PublicKey), SignatureError>;

    // Method for signing a message with the signer's secret key, sampling
    // the nonce from rng.
    fn sign<R: Rng>(
        &self,
        rng: &mut R,
        sk: &Self::Secret,
        message: &[u8],
    ) -> Result<Self::Signature, SignatureError>;

    // Method for verifying a signature on a message w.r.t. the signer's public key.
    fn verify(
        &self,
        pk: &Self::PublicKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<(), SignatureError>;
}
