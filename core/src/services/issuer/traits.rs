//! Seam between the issuer and an SMS provider

use async_trait::async_trait;

use crate::errors::ProviderError;

/// A text message ready for submission to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundSms {
    pub body: String,
    /// Sender identity
    pub from: String,
    /// Destination, in whatever format the provider expects
    pub to: String,
}

/// Messaging provider client
///
/// Implementations include:
/// - Twilio REST API
/// - Console client for development
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Submit a message and return the provider's message identifier
    async fn create(&self, message: OutboundSms) -> Result<String, ProviderError>;

    /// Get the service provider name (e.g. "Twilio", "Console")
    fn provider_name(&self) -> &str;
}
