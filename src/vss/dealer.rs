use crate::{
    vss::{
        config::PolyInfo,
        errors::VSSError,
        keys::KeyPair,
        promise::{Promise, Response},
        state::State,
    },
    Scalar,
};

use ark_ec::AffineCurve;
use rand::Rng;

use std::sync::{Arc, Mutex, MutexGuard};


// Handle through which receivers observe a dealer they did not create.
pub type SharedDealer<C> = Arc<Dealer<C>>;


// Struct Dealer pairs a promise with the state tracking who acknowledged it.
// The promise is immutable; the state sits behind a lock so that responses
// arriving from several tasks are applied one at a time.
#[derive(Debug)]
pub struct Dealer<C: AffineCurve> {
    info: PolyInfo<C>,
    promise: Arc<Promise<C>>,
    state: Mutex<State<C>>,
}

impl<C: AffineCurve> Dealer<C> {

    // Creates the dealer's promise sharing secret.secret among receivers.
    pub fn new<R: Rng>(
        info: PolyInfo<C>,
        secret: &KeyPair<C>,
        promiser: &KeyPair<C>,
        receivers: &[C],
        rng: &mut R,
    ) -> Result<Self, VSSError> {
        let promise = Promise::construct(&info.suite, secret, promiser, info.t, info.r, receivers, rng)?;
        Self::from_promise(info, promise)
    }

    // Wraps a promise received from another participant.
    pub fn from_promise(info: PolyInfo<C>, promise: Promise<C>) -> Result<Self, VSSError> {
        promise.check_shape()?;
        if promise.threshold != info.t || promise.certification != info.r || promise.num_receivers() != info.n {
            return Err(VSSError::PromiseConfigMismatch(
                promise.threshold,
                promise.certification,
                promise.num_receivers(),
            ));
        }

        let promise = Arc::new(promise);
        let state = State::new(info.suite, promise.clone());

        Ok(Self {
            info,
            promise,
            state: Mutex::new(state),
        })
    }

    pub fn info(&self) -> &PolyInfo<C> {
        &self.info
    }

    pub fn promise(&self) -> &Promise<C> {
        &self.promise
    }

    fn state(&self) -> Result<MutexGuard<'_, State<C>>, VSSError> {
        self.state.lock().map_err(|_| VSSError::StatePoisoned)
    }

    // Records the response of receiver i to this dealer's promise.
    pub fn add_response(&self, i: usize, response: &Response<C>) -> Result<(), VSSError> {
        self.state()?.add_response(i, response)
    }

    // Succeeds once the promise collected enough valid responses.
    pub fn certified(&self) -> Result<(), VSSError> {
        self.state()?.promise_certified()
    }

    pub fn num_responses(&self) -> Result<usize, VSSError> {
        Ok(self.state()?.num_responses())
    }

    pub fn reveal_share(&self, i: usize, key: &KeyPair<C>) -> Result<Scalar<C>, VSSError> {
        self.state()?.reveal_share(i, key)
    }
}


/* Unit tests: */

#[cfg(test)]
mod test {
    use crate::vss::{
        config::PolyInfo,
        dealer::Dealer,
        errors::VSSError,
        keys::KeyPair,
        promise::Promise,
        suite::Suite,
    };

    use ark_bls12_381::G1Affine as C;
    use rand::thread_rng;

    use std::{sync::Arc, thread};

    #[test]
    fn test_from_promise_config_mismatch() {
        let rng = &mut thread_rng();
        let suite = Suite::<C>::setup();
        let info = PolyInfo::new(suite, 2, 3, 3).unwrap();
        let keys = (0..3)
            .map(|_| KeyPair::generate(&suite, rng).unwrap())
            .collect::<Vec<_>>();
        let receivers = keys.iter().map(|k| k.public).collect::<Vec<_>>();

        let promise = Promise::construct(&suite, &keys[0], &keys[0], 2, 2, &receivers, rng).unwrap();
        assert!(matches!(
            Dealer::from_promise(info.clone(), promise),
            Err(VSSError::PromiseConfigMismatch(2, 2, 3))
        ));

        let mut promise = Promise::construct(&suite, &keys[0], &keys[0], 2, 3, &receivers, rng).unwrap();
        promise.shares.pop();
        assert!(matches!(
            Dealer::from_promise(info, promise),
            Err(VSSError::MismatchedShares(2, 3))
        ));
    }

    #[test]
    fn test_concurrent_responses() {
        let rng = &mut thread_rng();
        let n = 8;
        let suite = Suite::<C>::setup();
        let info = PolyInfo::new(suite, 3, 5, n).unwrap();
        let keys = (0..n)
            .map(|_| KeyPair::generate(&suite, rng).unwrap())
            .collect::<Vec<_>>();
        let receivers = keys.iter().map(|k| k.public).collect::<Vec<_>>();
        let secret = KeyPair::generate(&suite, rng).unwrap();
        let dealer = Arc::new(Dealer::new(info, &secret, &secret, &receivers, rng).unwrap());

        let responses = keys
            .iter()
            .enumerate()
            .map(|(i, key)| dealer.promise().produce_response(&suite, i, key, rng).unwrap())
            .collect::<Vec<_>>();

        let handles = responses
            .into_iter()
            .enumerate()
            .map(|(i, response)| {
                let dealer = dealer.clone();
                thread::spawn(move || dealer.add_response(i, &response).unwrap())
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(dealer.num_responses().unwrap(), n);
        dealer.certified().unwrap();
    }
}
