/// Service modules
pub mod verifier;
