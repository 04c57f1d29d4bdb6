mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use storekeep_core::{ApiClient, AppStore, CoreError, Dispatcher, TransportConfig};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Logout only touches the local session
        Command::Logout => commands::auth_cmd::logout(&cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "storekeep", &mut std::io::stdout());
            Ok(())
        }

        // Login needs a client but no stored token
        cmd @ Command::Login(_) => {
            let dispatcher = build_dispatcher(&cli.global, false)?;
            commands::dispatch(cmd, &dispatcher, &cli.global).await
        }

        // Everything else requires a client and a token
        cmd => {
            let dispatcher = build_dispatcher(&cli.global, true)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &dispatcher, &cli.global).await
        }
    }
}

/// Build the dispatcher (store + API client) from the config file,
/// profile, and CLI overrides.
fn build_dispatcher(global: &GlobalOpts, require_token: bool) -> Result<Dispatcher, CliError> {
    let cfg = storekeep_config::load_config_or_default();
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    let profile = cfg.profiles.get(&profile_name);

    // Server URL: flag/env beats profile.
    let server = global
        .server
        .clone()
        .or_else(|| profile.map(|p| p.server.clone()))
        .ok_or_else(|| CliError::NoConfig {
            path: storekeep_config::config_path().display().to_string(),
        })?;
    let url: url::Url = server.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {server}"),
    })?;

    let transport = TransportConfig {
        timeout: Duration::from_secs(global.timeout),
    };
    let api = ApiClient::new(url, &transport)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    // Token: flag/env beats the stored chain (env → keyring → session).
    if let Some(ref token) = global.token {
        api.set_token(SecretString::from(token.clone()));
    } else if require_token {
        let fallback = storekeep_config::Profile {
            server,
            token_env: None,
            timeout: None,
        };
        let token =
            storekeep_config::resolve_token(profile.unwrap_or(&fallback), &profile_name)?;
        api.set_token(token);
    }

    Ok(Dispatcher::new(Arc::new(AppStore::new()), Arc::new(api)))
}
