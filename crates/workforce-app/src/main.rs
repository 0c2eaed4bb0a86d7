//! # Workforce
//!
//! Command-line entry point for the department and seller registry.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;
use workforce_app::cli::{confirm, Cli, Controller};
use workforce_app::di::build_app_module;
use workforce_app::startup::{init_logging, print_startup_info};
use workforce_config::{AppConfig, ConfigLoader, ConfigValidator};
use workforce_core::{WorkforceError, WorkforceResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(&config.logging);
    print_startup_info(&config);

    if cli.command.needs_confirmation() {
        match confirm(&mut io::stdin().lock(), &mut io::stderr()) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Removal cancelled");
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                error!("Failed to read confirmation: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let module = match build_app_module(&config.database).await {
        Ok(module) => module,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let controller = Controller::from_module(&*module);
    match controller.execute(cli.command).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("{}: {}", failure.heading, failure.error);
            eprint!("{}", failure);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(cli: &Cli) -> WorkforceResult<AppConfig> {
    let loader = ConfigLoader::new(cli.config_dir.clone())?;
    let mut config = loader.get().await;

    if let Some(url) = &cli.database_url {
        config.database.url = url.clone();
        ConfigValidator::validate(&config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            WorkforceError::Configuration(message)
        })?;
    }

    Ok(config)
}
