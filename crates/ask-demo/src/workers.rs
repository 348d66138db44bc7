//! # Sample Workers
//!
//! Three workers, one per way an ask can end:
//!
//! | worker      | answer |
//! |-------------|--------|
//! | [`Greeter`] | a greeting, after a fixed latency |
//! | [`Blackhole`] | nothing, ever |
//! | [`Grumpy`]  | a failure |

use async_trait::async_trait;
use ask_bridge::Worker;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum GreetError {
    #[error("Cannot greet an empty name")]
    EmptyName,
}

/// Greets whoever it is asked about.
pub struct Greeter {
    latency: Duration,
    greeted: u64,
}

impl Greeter {
    pub fn new(latency: Duration) -> Self {
        Self { latency, greeted: 0 }
    }
}

#[async_trait]
impl Worker for Greeter {
    type Message = String;
    type Reply = String;
    type Error = GreetError;

    async fn handle(&mut self, name: String) -> Result<Option<String>, GreetError> {
        if name.trim().is_empty() {
            return Err(GreetError::EmptyName);
        }
        tokio::time::sleep(self.latency).await;
        self.greeted += 1;
        debug!(greeted = self.greeted, "Greeting");
        Ok(Some(format!("Hello, {name}!")))
    }

    async fn on_stop(&mut self) {
        info!(greeted = self.greeted, "Greeter done");
    }
}

/// Accepts everything and answers nothing.
pub struct Blackhole;

#[async_trait]
impl Worker for Blackhole {
    type Message = String;
    type Reply = String;
    type Error = std::convert::Infallible;

    async fn handle(&mut self, _message: String) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Not today: {0}")]
pub struct NotToday(pub String);

/// Refuses every request.
pub struct Grumpy;

#[async_trait]
impl Worker for Grumpy {
    type Message = String;
    type Reply = String;
    type Error = NotToday;

    async fn handle(&mut self, message: String) -> Result<Option<String>, NotToday> {
        Err(NotToday(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeter_greets() {
        let mut greeter = Greeter::new(Duration::ZERO);
        let reply = greeter.handle("Ada".to_string()).await.unwrap();
        assert_eq!(reply.as_deref(), Some("Hello, Ada!"));
        assert!(matches!(
            greeter.handle("  ".to_string()).await,
            Err(GreetError::EmptyName)
        ));
    }

    #[tokio::test]
    async fn test_blackhole_and_grumpy() {
        assert!(Blackhole.handle("hi".to_string()).await.unwrap().is_none());
        let err = Grumpy.handle("hi".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "Not today: hi");
    }
}
