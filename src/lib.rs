pub mod vss;
pub mod signature;


use ark_ec::AffineCurve;


///////////////////////////////////////////////////////////////////

/// The scalar field of the commitment group
pub type Scalar<C> = <C as AffineCurve>::ScalarField;

///////////////////////////////////////////////////////////////////


pub use vss::{
    config::PolyInfo,
    dealer::{Dealer, SharedDealer},
    errors::VSSError,
    keys::KeyPair,
    poly::PubPoly,
    promise::{Promise, Response},
    receiver::{Receiver, SharedSecret},
    suite::Suite,
};
