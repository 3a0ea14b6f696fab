use crate::signature::utils::errors::SignatureError;
use ark_serialize::SerializationError;
use thiserror::Error;

// Enumeration defining the errors of the joint VSS protocol. Every variant carries
// the offending index where one exists, so callers can attribute blame.
#[derive(Error, Debug)]
pub enum VSSError {
    #[error("Invalid polynomial parameters: t={0}, r={1}, n={2} (need 1 <= t <= r <= n)")]
    InvalidConfig(usize, usize, usize),
    #[error("Wrong index received for receiver: {given} instead of {bound}")]
    IndexMismatch { bound: usize, given: usize },
    #[error("Index {0} out of range for {1} receivers")]
    OutOfRangeIndex(usize, usize),
    #[error("Key pair does not belong to receiver {0}")]
    KeyMismatch(usize),
    #[error("Share {0} does not verify against the public polynomial")]
    ShareValidation(usize),
    #[error("Response given for index {0} was produced for index {1}")]
    ResponseIndexMismatch(usize, usize),
    #[error("Response {0} does not verify against the promise")]
    ResponseValidation(usize),
    #[error("Conflicting response already recorded for index {0}")]
    DuplicateResponse(usize),
    #[error("Promise not certified: {0} valid responses, {1} required")]
    CertificationShortfall(usize, usize),
    #[error("Dealer already added at position {0}")]
    DuplicateDealer(usize),
    #[error("Receiver has 0 dealers, can't produce a shared secret")]
    NoDealers,
    #[error("Not enough shares: {0} found, {1} required")]
    InsufficientShares(usize, usize),
    #[error("Receiver {receiver} could not reveal its share from dealer {dealer}: {source}")]
    RevealFailure {
        receiver: usize,
        dealer: usize,
        #[source]
        source: Box<VSSError>,
    },
    #[error("Share of receiver {0} could not be checked against the aggregate polynomial")]
    ConsistencyFailure(usize),
    #[error("Mismatched polynomial degrees. First has: {0}, Second has: {1}")]
    MismatchedDegree(usize, usize),
    #[error("Polynomials are committed under different base points")]
    MismatchedBase,
    #[error("Promise has {0} shares for {1} receivers")]
    MismatchedShares(usize, usize),
    #[error("Promise parameters (t={0}, r={1}, n={2}) do not match the configuration")]
    PromiseConfigMismatch(usize, usize, usize),
    #[error("Duplicate share index {0}")]
    DuplicateShareIndex(usize),
    #[error("Dealer state lock poisoned")]
    StatePoisoned,
    #[error("Signature error: {0}")]
    SignatureError(#[from] SignatureError),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerializationError),
}
