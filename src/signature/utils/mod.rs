pub mod errors;
pub mod hash;
