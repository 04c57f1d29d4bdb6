//! Login / logout handlers.
//!
//! Login prompts for anything not supplied, exchanges credentials for a
//! token, and persists the session (token + user) so later invocations
//! pick it up -- the CLI counterpart of the dashboard's localStorage.

use secrecy::{ExposeSecret, SecretString};

use storekeep_core::Dispatcher;

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;

use super::util;

pub async fn login(
    dispatcher: &Dispatcher,
    args: LoginArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let email = match args.email {
        Some(email) => email,
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| CliError::General(format!("prompt failed: {e}")))?,
    };

    let password: SecretString = match std::env::var("STOREKEEP_PASSWORD") {
        Ok(pw) => SecretString::from(pw),
        Err(_) => SecretString::from(
            rpassword::prompt_password("Password: ")
                .map_err(|e| CliError::General(format!("prompt failed: {e}")))?,
        ),
    };

    let outcome = dispatcher.login(&email, &password).await?;

    let profile_name = global.profile.as_deref().unwrap_or("default");
    storekeep_config::store_token(
        profile_name,
        outcome.token.expose_secret(),
        &outcome.user,
    )?;

    util::success(
        &format!("Signed in as {} <{}>", outcome.user.name, outcome.user.email),
        global,
    );
    Ok(())
}

pub fn logout(global: &GlobalOpts) -> Result<(), CliError> {
    storekeep_config::clear_session()?;
    util::success("Signed out", global);
    Ok(())
}
