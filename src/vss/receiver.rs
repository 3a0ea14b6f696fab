use crate::{
    vss::{
        config::PolyInfo,
        dealer::SharedDealer,
        errors::VSSError,
        keys::KeyPair,
        poly::PubPoly,
        promise::Response,
    },
    Scalar,
};

use ark_ec::AffineCurve;
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};
use log::{debug, warn};

use rand::Rng;
use std::sync::Arc;


/* SharedSecret is the output of a sharing round for one receiver: the
   aggregate public polynomial (sum of the contributing dealers' commitments)
   and this receiver's share of the implicit aggregate private polynomial. */

#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SharedSecret<C: AffineCurve> {
    pub pub_poly: PubPoly<C>,   // aggregate public polynomial
    pub share: Scalar<C>,       // sum over dealers j of f_j(index + 1)
    pub index: usize,           // the receiver's column index
}

impl<C: AffineCurve> SharedSecret<C> {

    pub fn verify(&self) -> bool {
        self.pub_poly.check(self.index, &self.share)
    }

    // Joint public key, base * (sum of the dealers' secrets).
    pub fn public_key(&self) -> C {
        self.pub_poly.free_coeff()
    }
}


// Struct Receiver collects the promises of several dealers for one column of
// the share matrix. Its index is bound by the first dealer added and must be
// the same for every later dealer.
pub struct Receiver<C: AffineCurve> {
    info: PolyInfo<C>,
    index: Option<usize>,
    key: KeyPair<C>,
    dealers: Vec<SharedDealer<C>>,
    secret: Option<SharedSecret<C>>,
}

impl<C: AffineCurve> Receiver<C> {

    pub fn new(info: PolyInfo<C>, key: KeyPair<C>) -> Self {
        let dealers = Vec::with_capacity(info.n);
        Self {
            info,
            index: None,
            key,
            dealers,
            secret: None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn key(&self) -> &KeyPair<C> {
        &self.key
    }

    pub fn dealers(&self) -> &[SharedDealer<C>] {
        &self.dealers
    }

    pub fn secret(&self) -> Option<&SharedSecret<C>> {
        self.secret.as_ref()
    }

    // Method for adding a dealer whose promise holds this receiver's share at
    // `index`. Returns the response to send back to the dealer. The dealer is
    // kept even when its share fails to validate, but a dealer already in the
    // list is refused.
    pub fn add_dealer<R: Rng>(
        &mut self,
        index: usize,
        dealer: SharedDealer<C>,
        rng: &mut R,
    ) -> Result<Response<C>, VSSError> {
        match self.index {
            None => {
                debug!("receiver bound to index {}", index);
                self.index = Some(index);
            }
            Some(bound) if bound != index => {
                return Err(VSSError::IndexMismatch { bound, given: index });
            }
            Some(_) => {}
        }

        // At most one promise per dealer, matched by handle or by dealer key.
        if let Some(position) = self.dealers.iter().position(|d| {
            Arc::ptr_eq(d, &dealer) || d.promise().dealer_key == dealer.promise().dealer_key
        }) {
            warn!("receiver {} was given dealer {} a second time", index, position);
            return Err(VSSError::DuplicateDealer(position));
        }

        let response = dealer.promise().produce_response(&self.info.suite, index, &self.key, rng);
        if let Err(e) = &response {
            warn!("receiver {} rejected promise of dealer {}: {}", index, self.dealers.len(), e);
        }
        self.dealers.push(dealer);

        response
    }

    // Method for computing this receiver's SharedSecret. Dealers are scanned in
    // the order they were added and the scan stops after t good shares; this
    // first-t policy is order dependent on purpose.
    pub fn produce_shared_secret(&mut self) -> Result<SharedSecret<C>, VSSError> {
        let index = match (self.index, self.dealers.is_empty()) {
            (Some(index), false) => index,
            _ => return Err(VSSError::NoDealers),
        };
        let t = self.info.t;
        let suite = &self.info.suite;

        let mut pub_poly = PubPoly::init_null(suite, t, suite.base());
        let mut share = Scalar::<C>::zero();
        let mut good_shares = 0;

        for (position, dealer) in self.dealers.iter().enumerate() {
            if good_shares >= t {
                break;
            }

            // For receiver i: s_i = sum over dealers j of f_j(i + 1)
            // TODO: report the failing dealer to the other receivers so they can
            // rebuild its polynomial and exclude it, instead of aborting here.
            let s = dealer.reveal_share(index, &self.key).map_err(|e| {
                warn!("receiver {} could not reveal share from dealer {}: {}", index, position, e);
                VSSError::RevealFailure {
                    receiver: index,
                    dealer: position,
                    source: Box::new(e),
                }
            })?;
            share += s;

            pub_poly.add_assign(dealer.promise().pub_poly())?;
            good_shares += 1;
        }

        if good_shares < t {
            return Err(VSSError::InsufficientShares(good_shares, t));
        }

        if !pub_poly.check(index, &share) {
            return Err(VSSError::ConsistencyFailure(index));
        }

        debug!("receiver {} produced its shared secret from {} dealers", index, good_shares);
        let secret = SharedSecret {
            pub_poly,
            share,
            index,
        };
        self.secret = Some(secret.clone());

        Ok(secret)
    }
}


/* Unit tests: */
