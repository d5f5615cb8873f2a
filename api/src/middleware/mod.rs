//! Request gates applied before handlers run

pub mod verification_gate;

pub use verification_gate::{ValidatedJson, ValidatedVerification, BODY_FIELD};
