pub mod errors;
pub mod suite;
pub mod keys;
pub mod config;
pub mod poly;

pub mod promise;
pub mod state;
pub mod dealer;
pub mod receiver;
