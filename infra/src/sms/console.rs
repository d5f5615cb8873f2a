//! Console messaging client
//!
//! Writes messages to the log (and optionally stdout) instead of sending them.
//! Used when `SMS_PROVIDER=mock` and in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::errors::ProviderError;
use otp_core::services::issuer::{MessagingClient, OutboundSms};
use otp_shared::phone::mask_phone_number;

/// Messaging client that never leaves the process
#[derive(Clone)]
pub struct ConsoleMessagingClient {
    /// Counter for tracking number of messages accepted
    message_count: Arc<AtomicU64>,
    /// Whether to simulate provider failures
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to stdout
    console_output: bool,
}

impl ConsoleMessagingClient {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a client with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    /// Get the total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for ConsoleMessagingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagingClient for ConsoleMessagingClient {
    async fn create(&self, message: OutboundSms) -> Result<String, ProviderError> {
        let masked_phone = mask_phone_number(&message.to);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                "Console SMS client simulating failure for phone: {}",
                masked_phone
            );
            return Err(ProviderError::Provider(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("console_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("CONSOLE SMS - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("From: {}", message.from);
            println!("To: {}", message.to);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message.body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "console",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.body.len(),
            "SMS accepted (console)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Console"
    }
}
