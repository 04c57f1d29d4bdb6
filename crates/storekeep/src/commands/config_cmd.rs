//! Config command handlers: profile management and introspection.

use storekeep_config::{Config, Profile, config_path, load_config_or_default, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { name, server } => {
            let mut cfg: Config = load_config_or_default();
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    server,
                    token_env: None,
                    timeout: None,
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(name.clone());
            }
            save_config(&cfg)?;
            util::success(
                &format!("Saved profile '{name}' to {}", config_path().display()),
                global,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(|e| CliError::General(format!("failed to render config: {e}")))?;
            if !global.quiet {
                println!("{rendered}");
            }
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
    }
}
