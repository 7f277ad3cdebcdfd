//! Step entry point - wire inputs to the cached runner

use crate::cache::{CacheEngine, EnvmanTransport};
use crate::cli::args::Cli;
use crate::cli::options::{parse_project_dir, split_options};
use crate::config::ConfigManager;
use crate::error::{Error, Result};
use crate::project::{FsStateProvider, Project};
use crate::runner::{CarthageInvocation, ProcessExecutor, Runner};
use crate::toolchain;
use crate::ui;
use crate::xcconfig::{resolve_xcconfig, DownloadingFileProvider};
use std::env;
use tracing::{debug, info};

/// Execute the configured Carthage command
pub async fn execute(cli: Cli) -> Result<()> {
    print_inputs(&cli);

    let command = cli.command().ok_or(Error::MissingCommand)?.to_string();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let settings = config_manager.load().await?;
    debug!("Settings: {:?}", settings);

    let args = split_options(&cli.carthage_options)?;

    let source_dir = match &cli.source_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().map_err(|e| Error::io("getting current directory", e))?,
    };
    let project_dir = parse_project_dir(&source_dir, &args);
    if project_dir != source_dir {
        info!(
            "--project-directory flag found, using {} as project directory",
            project_dir.display()
        );
    }

    let xcconfig_path = resolve_xcconfig(
        cli.xcconfig.clone().unwrap_or_default(),
        cli.xcconfig_file_env.clone().unwrap_or_default(),
        DownloadingFileProvider::new(),
    )
    .await?;

    ui::section("Environment");
    let carthage_version = toolchain::carthage_version().await?;
    ui::key_value("CarthageVersion", &carthage_version.to_string());
    let swift_version = toolchain::swift_version().await?;
    ui::key_value("SwiftVersion", &toolchain::single_line(&swift_version));

    let project = Project::with_layout(project_dir, settings.layout.clone());
    let cache = CacheEngine::new(
        project,
        swift_version,
        Box::new(FsStateProvider::new()),
        Box::new(EnvmanTransport::new()),
    );

    let runner = Runner::new(
        CarthageInvocation {
            command,
            args,
            github_access_token: cli.github_access_token.clone().unwrap_or_default(),
            xcconfig_path,
        },
        settings.runner_settings(),
        Box::new(cache),
        Box::new(ProcessExecutor::new()),
    );

    runner.run().await
}

fn print_inputs(cli: &Cli) {
    ui::section("Configs");
    ui::key_value("CarthageCommand", cli.command().unwrap_or_default());
    ui::key_value("CarthageOptions", &cli.carthage_options);
    let token = match cli.github_access_token.as_deref() {
        Some(t) if !t.is_empty() => "<set>",
        _ => "<not set>",
    };
    ui::key_value("GithubAccessToken", token);
    if let Some(dir) = &cli.source_dir {
        ui::key_value("SourceDir", &dir.display().to_string());
    }
    if let Some(xcconfig) = &cli.xcconfig {
        ui::key_value("XCConfig", xcconfig);
    }
}
