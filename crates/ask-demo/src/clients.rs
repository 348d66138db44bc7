//! # Greeter Client
//!
//! A high-level API for the `Greeter` worker. It wraps a [`Bridge`] and the
//! greeter's address and exposes greeting methods with a domain error.
use ask_bridge::{AskClient, AskError, Bridge, WorkerRef};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("Greeter did not answer in time")]
    TooSlow,
    #[error("Greeter communication error: {0}")]
    Communication(String),
}

/// Client for interacting with the Greeter worker.
#[derive(Clone)]
pub struct GreeterClient {
    bridge: Bridge,
    greeter: WorkerRef<String, String>,
}

impl GreeterClient {
    pub fn new(bridge: Bridge, greeter: WorkerRef<String, String>) -> Self {
        Self { bridge, greeter }
    }
}

#[async_trait]
impl AskClient for GreeterClient {
    type Target = WorkerRef<String, String>;
    type Error = GreeterError;

    fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    fn target(&self) -> &Self::Target {
        &self.greeter
    }

    fn map_error(e: AskError) -> Self::Error {
        match e {
            AskError::Timeout(_) => GreeterError::TooSlow,
            other => GreeterError::Communication(other.to_string()),
        }
    }
}

impl GreeterClient {
    #[instrument(skip(self))]
    pub async fn greet(&self, name: &str) -> Result<String, GreeterError> {
        debug!("Sending request");
        self.ask(name.to_string()).await
    }

    /// Blocking flavor for plain threads.
    #[instrument(skip(self))]
    pub fn greet_blocking(&self, name: &str) -> Result<String, GreeterError> {
        debug!("Sending request");
        self.ask_blocking(name.to_string())
    }
}
