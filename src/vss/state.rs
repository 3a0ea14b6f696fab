use crate::{
    vss::{
        errors::VSSError,
        keys::KeyPair,
        promise::{Promise, Response},
        suite::Suite,
    },
    Scalar,
};

use ark_ec::AffineCurve;
use ark_std::collections::BTreeMap;
use log::{debug, info};

use std::sync::Arc;


/* State is the dealer-side bookkeeping of a promise: the valid responses
   collected so far, keyed by receiver index. Once r of them are in, the promise
   is certified; responses are never removed, so certification never reverts. */

#[derive(Clone, Debug)]
pub struct State<C: AffineCurve> {
    suite: Suite<C>,
    promise: Arc<Promise<C>>,
    responses: BTreeMap<usize, Response<C>>,
}

impl<C: AffineCurve> State<C> {

    pub fn new(suite: Suite<C>, promise: Arc<Promise<C>>) -> Self {
        Self {
            suite,
            promise,
            responses: BTreeMap::new(),
        }
    }

    pub fn promise(&self) -> &Promise<C> {
        &self.promise
    }

    pub fn num_responses(&self) -> usize {
        self.responses.len()
    }

    // Method for recording the response of receiver `index`. Redelivery of the
    // exact same response is a no-op.
    pub fn add_response(&mut self, index: usize, response: &Response<C>) -> Result<(), VSSError> {
        self.promise.verify_response(&self.suite, index, response)?;

        if let Some(existing) = self.responses.get(&index) {
            if existing == response {
                return Ok(());
            }
            return Err(VSSError::DuplicateResponse(index));
        }

        self.responses.insert(index, response.clone());
        debug!(
            "accepted response {} ({}/{} towards certification)",
            index,
            self.responses.len(),
            self.promise.certification
        );
        if self.responses.len() == self.promise.certification {
            info!("promise from dealer {} is certified", self.promise.dealer_key);
        }

        Ok(())
    }

    pub fn promise_certified(&self) -> Result<(), VSSError> {
        if self.responses.len() < self.promise.certification {
            return Err(VSSError::CertificationShortfall(
                self.responses.len(),
                self.promise.certification,
            ));
        }
        Ok(())
    }

    // Reveals the verified share of receiver `index`. Only a certified promise
    // is trusted to reveal.
    pub fn reveal_share(&self, index: usize, key: &KeyPair<C>) -> Result<Scalar<C>, VSSError> {
        self.promise_certified()?;
        self.promise.reveal_share(&self.suite, index, key)
    }
}


/* Unit tests: */
