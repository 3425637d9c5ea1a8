pub mod dob;
pub mod fraud;
pub mod name;

pub use dob::DobValidator;
pub use fraud::{FraudChecker, DEFAULT_NAME_THRESHOLD};
pub use name::NameMatcher;
