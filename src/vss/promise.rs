use crate::{
    signature::scheme::SignatureScheme,
    vss::{
        config::check_thresholds,
        errors::VSSError,
        keys::KeyPair,
        poly::{eval_point, Polynomial, PubPoly},
        suite::Suite,
    },
    Scalar,
};

use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::PrimeField;
use ark_poly::{Polynomial as Poly, UVPolynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use blake2s_simd::Params;
use log::warn;

use rand::Rng;

const SHARE_PERSONALIZATION: &[u8] = b"VSSSHARE";     // persona for share blinding
const PROMISE_PERSONALIZATION: &[u8] = b"VSSPROMI";   // persona for promise digests


/* A Promise is a dealer's commitment package: the public commitment to its
   secret polynomial plus one blinded share per receiver. Share i is f(i + 1)
   masked with a key derived from the Diffie-Hellman point shared by the dealer
   and receiver i, so only receiver i (or the dealer) can recover it. */

#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Promise<C: AffineCurve> {
    pub threshold: usize,            // t: shares needed to reconstruct
    pub certification: usize,        // r: responses needed to certify
    pub dealer_key: C,               // dealer's public key
    pub receivers: Vec<C>,           // receivers' public keys, indexed by column
    pub pub_poly: PubPoly<C>,        // commitment to the secret polynomial
    pub shares: Vec<Scalar<C>>,      // blinded shares, one per receiver
}


/* A Response acknowledges that receiver `index` validated its share. It is a
   signature by the receiver's key over the promise digest and the index. */

#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Response<C: AffineCurve> {
    pub index: usize,
    pub signature: (C, Scalar<C>),
}


// Blinding mask for share `index`, derived from the Diffie-Hellman point.
fn share_mask<C: AffineCurve>(suite: &Suite<C>, dh: &C, index: usize) -> Result<Scalar<C>, VSSError> {
    let mut dh_bytes = vec![];
    dh.serialize(&mut dh_bytes)?;

    suite.hash_to_scalar(
        SHARE_PERSONALIZATION,
        &[&dh_bytes[..], &(index as u64).to_le_bytes()].concat(),
    )
}


impl<C: AffineCurve> Promise<C> {

    // Function for constructing a promise sharing secret.secret among receivers.
    pub fn construct<R: Rng>(
        suite: &Suite<C>,
        secret: &KeyPair<C>,
        dealer: &KeyPair<C>,
        t: usize,
        r: usize,
        receivers: &[C],
        rng: &mut R,
    ) -> Result<Self, VSSError> {
        check_thresholds(t, r, receivers.len())?;

        // f(0) = secret, followed by t-1 random coefficients
        let coeffs = std::iter::once(secret.secret)
            .chain((1..t).map(|_| suite.random_scalar(rng)))
            .collect::<Vec<_>>();
        let poly = Polynomial::<C>::from_coefficients_slice(&coeffs);

        let pub_poly = PubPoly::commit(suite.base(), &coeffs, t);

        // Blind f(i + 1) for every receiver i
        let shares = receivers
            .iter()
            .enumerate()
            .map::<Result<Scalar<C>, VSSError>, _>(|(i, pk)| {
                let dh = pk.mul(dealer.secret.into_repr()).into_affine();
                Ok(poly.evaluate(&eval_point::<C>(i)) + share_mask(suite, &dh, i)?)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            threshold: t,
            certification: r,
            dealer_key: dealer.public,
            receivers: receivers.to_vec(),
            pub_poly,
            shares,
        })
    }

    pub fn pub_poly(&self) -> &PubPoly<C> {
        &self.pub_poly
    }

    pub fn num_receivers(&self) -> usize {
        self.receivers.len()
    }

    // Checks the internal shape of a promise, e.g. after deserialization.
    pub fn check_shape(&self) -> Result<(), VSSError> {
        check_thresholds(self.threshold, self.certification, self.receivers.len())?;
        if self.shares.len() != self.receivers.len() {
            return Err(VSSError::MismatchedShares(self.shares.len(), self.receivers.len()));
        }
        if self.pub_poly.threshold() != self.threshold {
            return Err(VSSError::MismatchedDegree(self.pub_poly.threshold(), self.threshold));
        }
        Ok(())
    }

    // Hash of the promise's canonical serialization. Responses sign over it.
    pub fn digest(&self) -> Result<Vec<u8>, VSSError> {
        let mut bytes = vec![];
        self.serialize(&mut bytes)?;

        let hash = Params::new()
            .hash_length(32)
            .personal(PROMISE_PERSONALIZATION)
            .hash(&bytes);

        Ok(hash.as_bytes().to_vec())
    }

    fn response_message(&self, index: usize) -> Result<Vec<u8>, VSSError> {
        Ok([&self.digest()?[..], &(index as u64).to_le_bytes()].concat())
    }

    fn check_index(&self, index: usize) -> Result<(), VSSError> {
        if index >= self.receivers.len() || index >= self.shares.len() {
            return Err(VSSError::OutOfRangeIndex(index, self.receivers.len()));
        }
        Ok(())
    }

    // Unblinds share `index` with the receiver's key and verifies it against
    // the public polynomial.
    fn open_share(&self, suite: &Suite<C>, index: usize, key: &KeyPair<C>) -> Result<Scalar<C>, VSSError> {
        self.check_index(index)?;
        if key.public != self.receivers[index] {
            return Err(VSSError::KeyMismatch(index));
        }

        let dh = self.dealer_key.mul(key.secret.into_repr()).into_affine();
        let share = self.shares[index] - share_mask(suite, &dh, index)?;

        if !self.pub_poly.check(index, &share) {
            warn!("share {} of promise from dealer {} failed its commitment check", index, self.dealer_key);
            return Err(VSSError::ShareValidation(index));
        }

        Ok(share)
    }

    // Method called by receiver `index` to validate its share. On success the
    // returned Response is sent back to the dealer.
    pub fn produce_response<R: Rng>(
        &self,
        suite: &Suite<C>,
        index: usize,
        key: &KeyPair<C>,
        rng: &mut R,
    ) -> Result<Response<C>, VSSError> {
        self.open_share(suite, index, key)?;

        let signature = suite
            .signature_scheme()?
            .sign(rng, &key.secret, &self.response_message(index)?)?;

        Ok(Response { index, signature })
    }

    // Method for checking that `response` was produced by receiver `index`
    // for this very promise.
    pub fn verify_response(
        &self,
        suite: &Suite<C>,
        index: usize,
        response: &Response<C>,
    ) -> Result<(), VSSError> {
        self.check_index(index)?;
        if response.index != index {
            return Err(VSSError::ResponseIndexMismatch(index, response.index));
        }

        let message = self.response_message(index)?;
        suite
            .signature_scheme()?
            .verify(&self.receivers[index], &message, &response.signature)
            .map_err(|_| VSSError::ResponseValidation(index))
    }

    // Returns the verified raw share of receiver `index`.
    pub fn reveal_share(&self, suite: &Suite<C>, index: usize, key: &KeyPair<C>) -> Result<Scalar<C>, VSSError> {
        self.open_share(suite, index, key)
    }
}


/* Unit tests: */
