//! Messaging provider failures and the coarse categories exposed past the issuer.

use serde::Serialize;
use thiserror::Error;

/// Error returned by a messaging provider client
///
/// Carries the provider's own detail. This type is logged by the issuer and
/// never returned to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Provider authentication failed: {0}")]
    Unauthorized(String),

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

/// Category of a failed delivery, safe to hand to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryFailureKind {
    Network,
    InvalidRecipient,
    Unauthorized,
    RateLimited,
    Provider,
}

impl DeliveryFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryFailureKind::Network => "network",
            DeliveryFailureKind::InvalidRecipient => "invalid_recipient",
            DeliveryFailureKind::Unauthorized => "unauthorized",
            DeliveryFailureKind::RateLimited => "rate_limited",
            DeliveryFailureKind::Provider => "provider",
        }
    }
}

impl std::fmt::Display for DeliveryFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ProviderError> for DeliveryFailureKind {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::Network(_) => DeliveryFailureKind::Network,
            ProviderError::InvalidRecipient(_) => DeliveryFailureKind::InvalidRecipient,
            ProviderError::Unauthorized(_) => DeliveryFailureKind::Unauthorized,
            ProviderError::RateLimited(_) => DeliveryFailureKind::RateLimited,
            ProviderError::Provider(_) => DeliveryFailureKind::Provider,
        }
    }
}
