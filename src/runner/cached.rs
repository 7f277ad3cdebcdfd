//! Cached Carthage runner

use crate::cache::CarthageCache;
use crate::error::{Error, Result};
use crate::runner::command::CarthageCommand;
use crate::runner::executor::CommandExecutor;
use crate::runner::retry::RetryPolicy;
use crate::ui;
use tracing::{info, warn};

/// What to run
#[derive(Debug, Clone, Default)]
pub struct CarthageInvocation {
    /// Carthage subcommand, e.g. `bootstrap`
    pub command: String,

    /// User options following the subcommand
    pub args: Vec<String>,

    pub github_access_token: String,

    /// Extra xcconfig file, empty for none
    pub xcconfig_path: String,
}

/// Overridable constants of the runner
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// The subcommand that populates the cache
    pub cache_command: String,
    pub retry: RetryPolicy,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            cache_command: "bootstrap".to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Executes a Carthage command and caches the results
pub struct Runner {
    invocation: CarthageInvocation,
    settings: RunnerSettings,
    cache: Box<dyn CarthageCache>,
    executor: Box<dyn CommandExecutor>,
}

impl Runner {
    pub fn new(
        invocation: CarthageInvocation,
        settings: RunnerSettings,
        cache: Box<dyn CarthageCache>,
        executor: Box<dyn CommandExecutor>,
    ) -> Self {
        Self {
            invocation,
            settings,
            cache,
            executor,
        }
    }

    fn populates_cache(&self) -> bool {
        self.invocation.command == self.settings.cache_command
    }

    /// Run the command, skipping it when a valid cache can be committed
    pub async fn run(&self) -> Result<()> {
        if self.populates_cache() {
            if self.is_cache_available().await {
                ui::step_ok("Cache available");

                info!("Committing cache indicator...");
                match self.cache.commit().await {
                    Ok(()) => {
                        ui::done(&format!(
                            "Using cached dependencies for {} command. If you would like to force update your dependencies, use `update` as the Carthage command and re-run your build.",
                            self.settings.cache_command
                        ));
                        return Ok(());
                    }
                    Err(e) => warn!("Cache collection skipped: {}", e),
                }
            } else {
                ui::step_warn("Cache not available");
            }
        }

        self.perform().await.map_err(|e| match e {
            Error::Runner(failure) => Error::CarthageCommand(failure),
            other => other,
        })?;

        if self.populates_cache() {
            ui::section("Creating cache indicator");
            self.cache.create_indicator().await?;

            if let Err(e) = self.cache.commit().await {
                warn!("Cache committing skipped: {}", e);
            }
        }

        Ok(())
    }

    /// Availability check errors count as a cache miss
    async fn is_cache_available(&self) -> bool {
        ui::section("Check if cache is available");

        match self.cache.is_available().await {
            Ok(available) => available,
            Err(e) => {
                warn!("Failed to check if cache is available, error: {}", e);
                false
            }
        }
    }

    async fn perform(&self) -> Result<()> {
        let policy = &self.settings.retry;
        if !policy.applies_to(&self.invocation.command) {
            return self.execute_command().await;
        }

        policy
            .run(|attempt| async move {
                if attempt > 0 {
                    warn!(
                        "Carthage {} (possible) network failure, retrying ...",
                        self.invocation.command
                    );
                }
                self.execute_command().await
            })
            .await
    }

    fn build_command(&self) -> CarthageCommand {
        CarthageCommand::new()
            .github_token(&self.invocation.github_access_token)
            .xcconfig_file(&self.invocation.xcconfig_path)
            .append([self.invocation.command.as_str()])
            .append(self.invocation.args.iter().cloned())
    }

    async fn execute_command(&self) -> Result<()> {
        ui::section("Running Carthage command");

        let command = self.build_command();
        ui::command(&command.printable("carthage"));

        self.executor.execute(&command).await
    }
}
