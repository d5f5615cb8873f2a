//! Business services containing domain logic and use cases.

pub mod issuer;

// Re-export commonly used types
pub use issuer::{IssuerConfig, MessagingClient, OtpIssuer, OutboundSms};
