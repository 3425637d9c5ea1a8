pub mod data;
pub mod verdict;

pub use data::*;
pub use verdict::{VerdictStatus, VerificationResult, CONNECTION_ERROR_MESSAGE};
