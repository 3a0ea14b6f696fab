use crate::signature::utils::errors::SignatureError;
use ark_ff::Field;
use blake2s_simd::Params;

const MAX_ATTEMPTS: u32 = 256;

// Function for hashing a message into a field element. The digest is
// personalized with `personalization` (at most 8 bytes for blake2s) and
// prefixed with a counter, which is bumped until the digest lands in the field.
pub fn hash_to_field<F: Field>(
    personalization: &[u8],
    message: &[u8],
) -> Result<F, SignatureError> {
    for counter in 0..MAX_ATTEMPTS {
        let hash = Params::new()
            .hash_length(32)
            .personal(personalization)
            .to_state()
            .update(&counter.to_le_bytes())
            .update(message)
            .finalize();

        if let Some(f) = F::from_random_bytes(hash.as_bytes()) {
            return Ok(f);
        }
    }

    Err(SignatureError::HashToFieldError(MAX_ATTEMPTS))
}
