//! SMS Service Module
//!
//! Messaging provider clients implementing the core [`MessagingClient`] seam.
//!
//! ## Providers
//!
//! - **Twilio**: production SMS via the Twilio API (feature `twilio-sms`)
//! - **Console**: log-only client for development and tests

use std::sync::Arc;

use otp_core::services::issuer::MessagingClient;
use otp_shared::config::{SmsConfig, SmsProvider};

use crate::InfrastructureError;

pub mod console;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use console::ConsoleMessagingClient;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioMessagingClient};

/// Create the messaging client selected by configuration
///
/// # Arguments
///
/// * `config` - SMS configuration containing provider settings
///
/// # Returns
///
/// A shared client ready to hand to the OTP issuer
pub fn create_messaging_client(
    config: &SmsConfig,
) -> Result<Arc<dyn MessagingClient>, InfrastructureError> {
    match config.provider {
        SmsProvider::Mock => {
            tracing::warn!("Using console SMS client; messages will not be delivered");
            Ok(Arc::new(ConsoleMessagingClient::new()))
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => {
            let twilio_config = TwilioConfig::try_from(config)?;
            Ok(Arc::new(TwilioMessagingClient::new(twilio_config)))
        }
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => Err(InfrastructureError::Config(
            "Twilio provider requires the twilio-sms feature".to_string(),
        )),
    }
}
