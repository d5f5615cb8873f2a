//! Shared helpers for API integration tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use otp_api::AppState;
use otp_core::errors::ProviderError;
use otp_core::services::{IssuerConfig, MessagingClient, OtpIssuer, OutboundSms};

pub const SENDER: &str = "+15005550006";

/// Messaging client that remembers what it was asked to send
#[derive(Default)]
pub struct RecordingClient {
    pub sent: Mutex<Vec<OutboundSms>>,
    pub failure: Option<ProviderError>,
}

impl RecordingClient {
    pub fn failing(error: ProviderError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn sent(&self) -> Vec<OutboundSms> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingClient for RecordingClient {
    async fn create(&self, message: OutboundSms) -> Result<String, ProviderError> {
        self.sent.lock().unwrap().push(message);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok("SM00000000000000000000000000000001".to_string()),
        }
    }

    fn provider_name(&self) -> &str {
        "Recording"
    }
}

pub fn app_state(client: Arc<dyn MessagingClient>) -> web::Data<AppState> {
    let issuer = OtpIssuer::new(client, IssuerConfig::new(SENDER));
    web::Data::new(AppState::new(Arc::new(issuer)))
}
