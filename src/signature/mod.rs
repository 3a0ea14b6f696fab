pub mod scheme;
pub mod schnorr;
pub mod utils;
