//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `sms` - SMS provider credentials and sender identity
//!
//! Everything is read from the process environment once, at startup.

pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub sms: SmsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, String> {
        let environment = Environment::from_env();
        let sms = SmsConfig::from_env()?;

        if environment.is_production() && sms.provider == SmsProvider::Mock {
            return Err("SMS_PROVIDER=mock is not allowed in production".to_string());
        }

        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            sms,
            logging: LoggingConfig::from_env(environment),
        })
    }
}
