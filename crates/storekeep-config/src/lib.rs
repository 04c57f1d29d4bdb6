//! Shared configuration for the storekeep CLI.
//!
//! TOML profiles (one per server), token resolution (env + keyring +
//! session file), and persistence of the signed-in session -- the
//! counterpart of the web dashboard's localStorage `token`/`user` keys.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storekeep_api::TransportConfig;
use storekeep_core::User;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no token stored for profile '{profile}' -- run `storekeep login`")]
    NoToken { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named server profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Server base URL (e.g., "https://shop.example.com").
    pub server: String,

    /// Environment variable name containing the bearer token.
    pub token_env: Option<String>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "storekeep", "storekeep")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Resolve the session state file path (token + signed-in user).
pub fn session_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("session.toml"),
        |dirs| dirs.config_dir().join("session.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("storekeep");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment (`STOREKEEP_*`).
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("STOREKEEP_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Session state (the localStorage counterpart) ────────────────────

/// Persisted session: the bearer token and the signed-in user snapshot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Write session state to `path` (parents created as needed).
pub fn save_session_to(path: &Path, session: &SessionState) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(session)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Read session state from `path`; a missing or unparseable file is an
/// empty session, not an error.
pub fn load_session_from(path: &Path) -> SessionState {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| toml::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Write session state to the canonical path.
pub fn save_session(session: &SessionState) -> Result<(), ConfigError> {
    save_session_to(&session_path(), session)
}

/// Read session state from the canonical path.
pub fn load_session() -> SessionState {
    load_session_from(&session_path())
}

/// Delete the persisted session (logout).
pub fn clear_session() -> Result<(), ConfigError> {
    let path = session_path();
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve a bearer token for a profile.
///
/// Chain: profile's `token_env` → `STOREKEEP_TOKEN` → system keyring →
/// session file. The first hit wins.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Generic env var
    if let Ok(val) = std::env::var("STOREKEEP_TOKEN") {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("storekeep", &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Session file
    if let Some(token) = load_session().token {
        return Ok(SecretString::from(token));
    }

    Err(ConfigError::NoToken {
        profile: profile_name.into(),
    })
}

/// Persist a freshly-issued token: session file always, keyring best
/// effort (headless hosts frequently have no secret service).
pub fn store_token(profile_name: &str, token: &str, user: &User) -> Result<(), ConfigError> {
    save_session(&SessionState {
        token: Some(token.to_owned()),
        user: Some(user.clone()),
    })?;

    if let Ok(entry) = keyring::Entry::new("storekeep", &format!("{profile_name}/token")) {
        let _ = entry.set_password(token);
    }

    Ok(())
}

// ── Client construction ─────────────────────────────────────────────

/// Parse a profile's server URL.
pub fn profile_server_url(profile: &Profile) -> Result<url::Url, ConfigError> {
    profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })
}

/// Build a `TransportConfig` from a profile — no CLI flag overrides.
pub fn profile_transport(profile: &Profile, defaults: &Defaults) -> TransportConfig {
    TransportConfig {
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use storekeep_core::RecordId;

    fn user() -> User {
        User {
            id: RecordId::Int(1),
            name: "Admin".into(),
            email: "admin@x.com".into(),
            role: Some("admin".into()),
        }
    }

    #[test]
    fn session_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let session = SessionState {
            token: Some("jwt-abc".into()),
            user: Some(user()),
        };
        save_session_to(&path, &session).unwrap();

        let loaded = load_session_from(&path);
        assert_eq!(loaded.token.as_deref(), Some("jwt-abc"));
        assert_eq!(loaded.user.unwrap().email, "admin@x.com");
    }

    #[test]
    fn missing_session_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_session_from(&dir.path().join("nope.toml"));
        assert!(loaded.token.is_none());
        assert!(loaded.user.is_none());
    }

    #[test]
    fn corrupt_session_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not [toml").unwrap();
        let loaded = load_session_from(&path);
        assert!(loaded.token.is_none());
    }

    #[test]
    fn profile_url_validation() {
        let profile = Profile {
            server: "not a url".into(),
            token_env: None,
            timeout: None,
        };
        assert!(matches!(
            profile_server_url(&profile),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn profile_timeout_overrides_defaults() {
        let profile = Profile {
            server: "https://shop.example.com".into(),
            token_env: None,
            timeout: Some(5),
        };
        let transport = profile_transport(&profile, &Defaults::default());
        assert_eq!(transport.timeout, Duration::from_secs(5));
    }
}
