//! Carthage process execution
//!
//! Stdout streams straight to ours. Stderr is copied to ours and kept in
//! memory so a failure can be classified afterwards.

use crate::error::{Error, Result, RunnerError};
use crate::runner::command::CarthageCommand;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::debug;

/// Runs a built Carthage command
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run to completion. A non-zero exit is reported as [`Error::Runner`].
    async fn execute(&self, command: &CarthageCommand) -> Result<()>;
}

/// Executes Carthage as a child process
pub struct ProcessExecutor {
    program: String,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::with_program("carthage")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Copy the child's stderr to ours, returning everything read
    async fn tee_stderr(child: &mut tokio::process::Child) -> Vec<u8> {
        let mut captured = Vec::new();
        let Some(mut stderr) = child.stderr.take() else {
            return captured;
        };

        let mut out = tokio::io::stderr();
        let mut buf = [0u8; 8192];
        loop {
            match stderr.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    captured.extend_from_slice(&buf[..n]);
                    if let Err(e) = out.write_all(&buf[..n]).await {
                        debug!("Copying child stderr failed: {}", e);
                    }
                }
                Err(e) => {
                    debug!("Reading child stderr stopped: {}", e);
                    break;
                }
            }
        }
        if let Err(e) = out.flush().await {
            debug!("Flushing stderr failed: {}", e);
        }

        captured
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &CarthageCommand) -> Result<()> {
        let printable = command.printable(&self.program);
        debug!("Executing: {}", printable);

        let mut child = Command::new(&self.program)
            .args(command.args())
            .envs(command.envs().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::command_failed(printable.clone(), e))?;

        let stderr = Self::tee_stderr(&mut child).await;

        let status = child
            .wait()
            .await
            .map_err(|e| Error::command_failed(printable, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(RunnerError::new(String::from_utf8_lossy(&stderr), status.to_string()).into())
        }
    }
}
