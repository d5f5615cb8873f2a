//! Configuration for the OTP issuer

use otp_shared::config::SmsConfig;

/// Placeholder replaced by the code in the message template
pub const CODE_PLACEHOLDER: &str = "{code}";

pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Your verification code is {code}";

/// Issuer settings, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    /// Sender identity passed to the provider on every message
    pub sender: String,
    /// Message body; `{code}` is replaced by the generated code
    pub message_template: String,
}

impl IssuerConfig {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }

    /// Build the text body for `code`
    ///
    /// A template without the placeholder gets the code appended.
    pub fn render_message(&self, code: &str) -> String {
        if self.message_template.contains(CODE_PLACEHOLDER) {
            self.message_template.replace(CODE_PLACEHOLDER, code)
        } else {
            format!("{} {}", self.message_template.trim_end(), code)
        }
    }
}

impl From<&SmsConfig> for IssuerConfig {
    fn from(config: &SmsConfig) -> Self {
        Self::new(config.from_number.clone())
    }
}
