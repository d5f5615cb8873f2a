//! Mock implementations for testing the OTP issuer

use async_trait::async_trait;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use crate::errors::ProviderError;
use crate::services::issuer::{MessagingClient, OutboundSms};

// Records every message; fails every call when `failure` is set
pub struct RecordingMessagingClient {
    pub sent: Mutex<Vec<OutboundSms>>,
    pub failure: Option<ProviderError>,
}

impl RecordingMessagingClient {
    pub fn succeeding() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn sent_messages(&self) -> Vec<OutboundSms> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingClient for RecordingMessagingClient {
    async fn create(&self, message: OutboundSms) -> Result<String, ProviderError> {
        self.sent.lock().unwrap().push(message);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(format!("SM{:032}", self.sent.lock().unwrap().len())),
        }
    }

    fn provider_name(&self) -> &str {
        "Recording"
    }
}

// Log sink for asserting on what the issuer wrote
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
