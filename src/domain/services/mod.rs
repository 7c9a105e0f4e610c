pub mod digest;
pub mod verifier;
