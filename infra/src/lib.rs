//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `otp_core`, plus the
//! document text extraction used alongside the OTP flow.
//!
//! - **SMS**: messaging clients (Twilio, console) behind `MessagingClient`
//! - **Extraction**: PDF text layer and OCR extractors behind `TextExtractor`
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio messaging client (default)

use thiserror::Error;

/// SMS service module - messaging provider clients
pub mod sms;

/// PDF text extraction
pub mod extraction;

pub use extraction::{ExtractionError, OcrTextExtractor, PdfTextExtractor, TextExtractor};
pub use sms::{create_messaging_client, ConsoleMessagingClient};

/// Infrastructure error types
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),
}
