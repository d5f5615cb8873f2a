//! OTP issuer implementation

use std::sync::Arc;

use otp_shared::phone::mask_phone_number;

use crate::domain::entities::one_time_password::OneTimePassword;
use crate::errors::{DeliveryFailureKind, DomainError, DomainResult};

use super::config::IssuerConfig;
use super::traits::{MessagingClient, OutboundSms};

/// Generates one-time passwords and sends them by SMS
pub struct OtpIssuer {
    /// Provider client used for delivery
    client: Arc<dyn MessagingClient>,
    /// Sender identity and message template
    config: IssuerConfig,
}

impl OtpIssuer {
    /// Create a new issuer
    ///
    /// # Arguments
    ///
    /// * `client` - Messaging provider client
    /// * `config` - Sender identity and message template
    pub fn new(client: Arc<dyn MessagingClient>, config: IssuerConfig) -> Self {
        tracing::info!(
            provider = client.provider_name(),
            sender = %mask_phone_number(&config.sender),
            "OTP issuer initialized"
        );
        Self { client, config }
    }

    /// Generate a fresh six-digit code. No side effects.
    pub fn generate() -> OneTimePassword {
        OneTimePassword::generate()
    }

    /// Send `code` to `phone_number`
    ///
    /// The phone number goes to the provider exactly as given. A provider
    /// failure is logged with its full detail and returned as
    /// [`DomainError::DeliveryFailed`], which carries only the failure category.
    /// A single attempt is made.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Destination in the provider's expected format
    /// * `code` - The code to embed in the message body
    pub async fn dispatch(&self, phone_number: &str, code: &str) -> DomainResult<()> {
        let message = OutboundSms {
            body: self.config.render_message(code),
            from: self.config.sender.clone(),
            to: phone_number.to_string(),
        };

        match self.client.create(message).await {
            Ok(message_sid) => {
                tracing::info!(
                    phone = %mask_phone_number(phone_number),
                    provider = self.client.provider_name(),
                    message_sid = %message_sid,
                    event = "otp_dispatched",
                    "Verification code sent"
                );
                Ok(())
            }
            Err(e) => {
                let kind = DeliveryFailureKind::from(&e);
                tracing::error!(
                    phone = %mask_phone_number(phone_number),
                    provider = self.client.provider_name(),
                    failure_kind = %kind,
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to send verification code"
                );
                Err(DomainError::DeliveryFailed { kind })
            }
        }
    }

    /// Generate a code and dispatch it, returning the code for the caller to persist
    pub async fn issue(&self, phone_number: &str) -> DomainResult<OneTimePassword> {
        let code = Self::generate();
        self.dispatch(phone_number, code.as_str()).await?;
        Ok(code)
    }
}
