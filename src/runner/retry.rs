//! Retry policy for transient Carthage failures

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Which commands are retried, how often, and what counts as transient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retries: u32,

    /// Fixed wait between attempts, in seconds
    pub wait_secs: u64,

    /// Subcommands the policy applies to
    pub commands: Vec<String>,

    /// Case-insensitive stderr phrases marking a network failure
    pub failure_phrases: Vec<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 1,
            wait_secs: 3,
            commands: vec!["bootstrap".to_string(), "update".to_string()],
            failure_phrases: vec!["failed to connect to".to_string(), "timed out".to_string()],
        }
    }
}

impl RetryPolicy {
    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_secs)
    }

    /// Whether the policy covers this subcommand
    pub fn applies_to(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }

    /// Whether an attempt failed for a transient reason
    pub fn is_retryable(&self, err: &Error) -> bool {
        err.is_retryable(&self.failure_phrases)
    }

    /// Run `attempt` until it succeeds, fails permanently, or the retries
    /// are used up. The closure receives the zero-based attempt number.
    pub async fn run<F, Fut>(&self, mut attempt: F) -> Result<()>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut number = 0;
        loop {
            match attempt(number).await {
                Ok(()) => return Ok(()),
                Err(e) if number < self.retries && self.is_retryable(&e) => {
                    number += 1;
                    sleep(self.wait()).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
