//! Error to HTTP response mapping

pub mod error;

pub use error::{handle_domain_error, request_id, validation_failure, RejectedRequest};
