//! SMS provider configuration
//!
//! The sender identity is read once at startup and handed to the OTP issuer
//! explicitly; nothing downstream reads the process environment.

use serde::{Deserialize, Serialize};
use std::env;

use crate::utils::phone::{is_valid_e164, normalize_phone_number};

/// Sender phone identity used for every outbound message
pub const SENDER_NUMBER_VAR: &str = "TWILIO_PHONE_NUMBER";

const DEFAULT_MOCK_SENDER: &str = "+15005550006";

/// SMS provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio REST API
    Twilio,
    /// Log-only provider for development and tests
    Mock,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(SmsProvider::Twilio),
            "mock" | "console" => Ok(SmsProvider::Mock),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

impl std::fmt::Display for SmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsProvider::Twilio => write!(f, "twilio"),
            SmsProvider::Mock => write!(f, "mock"),
        }
    }
}

/// SMS service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Which provider to build at startup
    pub provider: SmsProvider,
    /// Provider account identifier (Twilio Account SID)
    pub account_sid: String,
    /// Provider secret (Twilio Auth Token)
    pub auth_token: String,
    /// Sender identity, E.164
    pub from_number: String,
}

// auth_token stays out of Debug output
impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("provider", &self.provider)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .finish()
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: DEFAULT_MOCK_SENDER.to_string(),
        }
    }
}

impl SmsConfig {
    /// Load configuration from environment variables
    ///
    /// `SMS_PROVIDER` selects the provider (default `mock`). The Twilio provider
    /// requires `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and `TWILIO_PHONE_NUMBER`.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SmsConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("SMS_PROVIDER") {
            Some(value) => value.parse()?,
            None => SmsProvider::Mock,
        };

        let mut config = match provider {
            SmsProvider::Twilio => {
                let required = |key: &str| {
                    lookup(key)
                        .filter(|v| !v.trim().is_empty())
                        .ok_or_else(|| format!("{} not set", key))
                };
                Self {
                    provider,
                    account_sid: required("TWILIO_ACCOUNT_SID")?,
                    auth_token: required("TWILIO_AUTH_TOKEN")?,
                    from_number: required(SENDER_NUMBER_VAR)?,
                }
            }
            SmsProvider::Mock => Self {
                provider,
                account_sid: lookup("TWILIO_ACCOUNT_SID").unwrap_or_default(),
                auth_token: lookup("TWILIO_AUTH_TOKEN").unwrap_or_default(),
                from_number: lookup(SENDER_NUMBER_VAR)
                    .unwrap_or_else(|| DEFAULT_MOCK_SENDER.to_string()),
            },
        };

        // The sender goes to the provider as stored, so store the canonical form
        config.from_number = normalize_phone_number(&config.from_number);
        config.validate()?;
        Ok(config)
    }

    /// The sender identity must be an E.164 number
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_e164(&self.from_number) {
            return Err(format!(
                "{} must be in E.164 format (e.g. +15551234567)",
                SENDER_NUMBER_VAR
            ));
        }
        Ok(())
    }
}
