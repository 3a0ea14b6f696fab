use ark_serialize::SerializationError;
use thiserror::Error;

// Enumeration whose variants model the various errors that can
// occur w.r.t. signing, verifying and hashing.
#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Failed verifying Schnorr signature")]
    SchnorrVerify,
    #[error("Could not hash message into the scalar field after {0} attempts")]
    HashToFieldError(u32),
    #[error("SerializationError: {0}")]
    SerializationError(#[from] SerializationError),
}
