//! support-plus - Support Plus shell
//!
//! Resolves the active identity, keeps its profile in sync and shows the
//! benefits cached for it.
//!
//! # Examples
//!
//! ```bash
//! # Sign in by SMS code
//! support-plus login phone "8 999 123-45-67"
//!
//! # Fill the cache for the active identity and list it
//! support-plus catalog sync
//! support-plus catalog list --kind benefits --pretty
//! ```

use sp_cli::catalog_commands::CatalogCommands;
use sp_cli::cli::Cli;
use sp_cli::commands::Commands;
use sp_cli::hidden_commands::HiddenCommands;
use sp_cli::identity_commands::IdentityCommands;
use sp_cli::login_commands::LoginCommands;
use sp_cli::profile_commands::ProfileCommands;
use sp_cli::{App, AppError, Result as AppErrorResult, logger};

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting support-plus v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = match App::init(&config).await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&app, cli.command).await;

    if let Some(message) = app.profile_error().await {
        eprintln!("{}", message);
        eprintln!("  Retry:          support-plus profile refresh");
        eprintln!("  Switch account: support-plus logout");
    }
    app.shutdown().await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load and validate the configuration, then start the logger.
fn load_config() -> AppErrorResult<sp_config::Config> {
    let config = sp_config::Config::load()?;
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    Ok(config)
}

async fn run(app: &App, command: Commands) -> AppErrorResult<Value> {
    match command {
        Commands::Status => app.status().await,

        Commands::Login { method } => match method {
            LoginCommands::Phone { phone, code } => {
                app.login_with_phone(&phone, |request| {
                    if let Some(ref mock_code) = request.mock_code {
                        eprintln!("Test mode code: {}", mock_code);
                    }
                    code.map_or_else(|| prompt("SMS code: "), Ok)
                })
                .await
            }
            LoginCommands::Email { email, code } => {
                app.login_with_email(&email, || code.map_or_else(|| prompt("E-mail code: "), Ok))
                    .await
            }
        },

        Commands::Identity { action } => match action {
            IdentityCommands::Set { id, email, phone } => app.set_identity(&id, email, phone).await,
            IdentityCommands::Clear => app.clear_identity().await,
        },

        Commands::Profile { action } => match action {
            ProfileCommands::Show => app.show_profile().await,
            ProfileCommands::Refresh => app.refresh_profile().await,
            ProfileCommands::Update { changes } => app.update_profile(changes.into_update()?).await,
        },

        Commands::Catalog { action } => match action {
            CatalogCommands::Sync => app.sync_catalog().await,
            CatalogCommands::List { kind, all } => app.list_catalog(kind, all).await,
        },

        Commands::Hidden { action } => match action {
            HiddenCommands::Toggle { benefit_id } => app.toggle_hidden(&benefit_id).await,
            HiddenCommands::List => app.hidden_ids().await,
        },

        Commands::Logout => app.logout().await,

        Commands::DeleteAccount { yes } => {
            if !yes {
                return Err(AppError::usage(
                    "account deletion is permanent; pass --yes to confirm",
                ));
            }
            app.delete_account().await
        }
    }
}

fn prompt(label: &str) -> AppErrorResult<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{}", label)?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let code = line.trim().to_string();
    if code.is_empty() {
        return Err(AppError::otp("no code entered"));
    }
    Ok(code)
}
