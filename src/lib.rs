pub mod client;
pub mod config;
pub mod kyc_checker;
pub mod models;
pub mod processing;
pub mod server;
pub mod utils;
pub mod validation;

pub use kyc_checker::KycChecker;
