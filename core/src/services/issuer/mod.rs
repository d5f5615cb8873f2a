//! OTP issuer: code generation and SMS dispatch
//!
//! The issuer owns no mutable state. It holds the provider client and an
//! immutable [`IssuerConfig`], so one instance can serve concurrent requests.

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{IssuerConfig, CODE_PLACEHOLDER, DEFAULT_MESSAGE_TEMPLATE};
pub use service::OtpIssuer;
pub use traits::{MessagingClient, OutboundSms};
