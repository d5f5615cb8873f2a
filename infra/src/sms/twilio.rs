//! Twilio SMS client
//!
//! Submits messages through the Twilio REST API. The destination number is
//! handed to Twilio unchanged; Twilio itself rejects malformed numbers.

use async_trait::async_trait;
use tracing::{debug, info};
use twilio::{Client, OutboundMessage};

use otp_core::errors::ProviderError;
use otp_core::services::issuer::{MessagingClient, OutboundSms};
use otp_shared::config::SmsConfig;
use otp_shared::phone::mask_phone_number;

use crate::InfrastructureError;

/// Twilio caps a single message body at 1600 characters
pub const MAX_BODY_LENGTH: usize = 1600;

/// Twilio credentials
#[derive(Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .finish()
    }
}

impl TryFrom<&SmsConfig> for TwilioConfig {
    type Error = InfrastructureError;

    fn try_from(config: &SmsConfig) -> Result<Self, Self::Error> {
        if config.account_sid.is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID not set".to_string(),
            ));
        }
        if config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_AUTH_TOKEN not set".to_string(),
            ));
        }
        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
        })
    }
}

/// Twilio messaging client
pub struct TwilioMessagingClient {
    client: Client,
}

impl TwilioMessagingClient {
    /// Create a new Twilio client
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);
        info!("Twilio messaging client initialized");
        Self { client }
    }
}

#[async_trait]
impl MessagingClient for TwilioMessagingClient {
    async fn create(&self, message: OutboundSms) -> Result<String, ProviderError> {
        if message.body.len() > MAX_BODY_LENGTH {
            return Err(ProviderError::Provider(format!(
                "Message exceeds maximum length of {} characters",
                MAX_BODY_LENGTH
            )));
        }

        debug!(
            "Submitting SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(&message.to),
            message.body.len()
        );

        let outbound = OutboundMessage::new(&message.from, &message.to, &message.body);
        match self.client.send_message(outbound).await {
            Ok(response) => Ok(response.sid),
            Err(e) => Err(classify_twilio_error(&e.to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

/// Map a Twilio client error onto a provider error category
///
/// The Twilio crate reports failures as text; the HTTP status and Twilio
/// error codes embedded in it decide the category.
pub fn classify_twilio_error(error_msg: &str) -> ProviderError {
    let lower = error_msg.to_lowercase();
    let detail = error_msg.to_string();

    if lower.contains("429") || lower.contains("rate") || lower.contains("too many") {
        ProviderError::RateLimited(detail)
    } else if lower.contains("401")
        || lower.contains("403")
        || lower.contains("auth")
        || lower.contains("20003")
    {
        ProviderError::Unauthorized(detail)
    } else if lower.contains("21211")
        || lower.contains("21614")
        || lower.contains("invalid 'to'")
        || lower.contains("not a valid phone number")
    {
        ProviderError::InvalidRecipient(detail)
    } else if lower.contains("network")
        || lower.contains("connect")
        || lower.contains("timed out")
        || lower.contains("dns")
    {
        ProviderError::Network(detail)
    } else {
        ProviderError::Provider(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rate_limit() {
        assert!(matches!(
            classify_twilio_error("HTTP 429 Too Many Requests"),
            ProviderError::RateLimited(_)
        ));
    }

    #[test]
    fn test_classify_auth_failure() {
        assert!(matches!(
            classify_twilio_error("Authentication error (20003)"),
            ProviderError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_twilio_error("HTTP 401"),
            ProviderError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_classify_invalid_recipient() {
        assert!(matches!(
            classify_twilio_error("The 'To' number +1555 is not a valid phone number. (21211)"),
            ProviderError::InvalidRecipient(_)
        ));
    }

    #[test]
    fn test_classify_network() {
        assert!(matches!(
            classify_twilio_error("error trying to connect: dns error"),
            ProviderError::Network(_)
        ));
    }

    #[test]
    fn test_classify_keeps_detail() {
        match classify_twilio_error("HTTP 500 Internal Server Error") {
            ProviderError::Provider(detail) => assert_eq!(detail, "HTTP 500 Internal Server Error"),
            other => panic!("Expected Provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_requires_credentials() {
        let sms = SmsConfig {
            account_sid: "ACtest".to_string(),
            ..Default::default()
        };
        let err = TwilioConfig::try_from(&sms).unwrap_err();
        assert!(err.to_string().contains("TWILIO_AUTH_TOKEN"));

        let sms = SmsConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "secret".to_string(),
            ..Default::default()
        };
        let config = TwilioConfig::try_from(&sms).unwrap();
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[tokio::test]
    async fn test_oversized_body_rejected_before_request() {
        let client = TwilioMessagingClient::new(TwilioConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "test".to_string(),
        });
        let message = OutboundSms {
            body: "x".repeat(MAX_BODY_LENGTH + 1),
            from: "+15005550006".to_string(),
            to: "+15551234567".to_string(),
        };

        let err = client.create(message).await.unwrap_err();
        assert!(matches!(err, ProviderError::Provider(_)));
    }
}
