//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `LEADERBOARD_*` environment variables, and an
//! optional config file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const DEFAULT_DB_POOL_SIZE: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("database pool size must be at least 1")]
    EmptyPool,
    #[error("`{name}` must be true or false, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
}

/// Runtime configuration for the leaderboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LEADERBOARD")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without it the server keeps all state in
    /// memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_pool_size: Option<u32>,
    /// File holding the session cookie key material.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure` (`true`/`false`). Defaults to on.
    ///
    /// Switches are read as text so an omitted CLI flag leaves the
    /// environment value in place.
    pub cookie_secure: Option<String>,
    /// Fall back to a throwaway session key when the key file is unreadable.
    /// Defaults to off.
    pub allow_ephemeral_session_key: Option<String>,
}

fn parse_switch(
    name: &'static str,
    raw: Option<&str>,
    default: bool,
) -> Result<bool, SettingsError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidFlag {
            name,
            value: value.to_owned(),
        }),
    }
}

impl ServerSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_pool_size(&self) -> Result<u32, SettingsError> {
        match self.db_pool_size.unwrap_or(DEFAULT_DB_POOL_SIZE) {
            0 => Err(SettingsError::EmptyPool),
            size => Ok(size),
        }
    }

    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether the session cookie carries `Secure`, on unless disabled.
    pub fn cookie_secure(&self) -> Result<bool, SettingsError> {
        parse_switch("cookie_secure", self.cookie_secure.as_deref(), true)
    }

    /// Whether an unreadable key file may fall back to a generated key.
    pub fn allow_ephemeral_session_key(&self) -> Result<bool, SettingsError> {
        parse_switch(
            "allow_ephemeral_session_key",
            self.allow_ephemeral_session_key.as_deref(),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "LEADERBOARD_BIND_ADDR",
        "LEADERBOARD_DATABASE_URL",
        "LEADERBOARD_DB_POOL_SIZE",
        "LEADERBOARD_SESSION_KEY_FILE",
        "LEADERBOARD_COOKIE_SECURE",
        "LEADERBOARD_ALLOW_EPHEMERAL_SESSION_KEY",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("leaderboard")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|var| (var, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default bind"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket addr")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_pool_size().expect("pool size"), 10);
        assert_eq!(
            settings.session_key_file(),
            PathBuf::from(DEFAULT_SESSION_KEY_FILE)
        );
        assert!(settings.cookie_secure().expect("cookie flag"));
        assert!(
            !settings
                .allow_ephemeral_session_key()
                .expect("ephemeral flag")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LEADERBOARD_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "LEADERBOARD_DATABASE_URL",
                Some("postgres://localhost/leaderboard".to_owned()),
            ),
            ("LEADERBOARD_DB_POOL_SIZE", Some("4".to_owned())),
            ("LEADERBOARD_SESSION_KEY_FILE", Some("/tmp/key".to_owned())),
            ("LEADERBOARD_COOKIE_SECURE", Some("false".to_owned())),
            (
                "LEADERBOARD_ALLOW_EPHEMERAL_SESSION_KEY",
                Some("true".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("bind"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("socket addr")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/leaderboard")
        );
        assert_eq!(settings.db_pool_size().expect("pool size"), 4);
        assert_eq!(settings.session_key_file(), PathBuf::from("/tmp/key"));
        assert!(!settings.cookie_secure().expect("cookie flag"));
        assert!(
            settings
                .allow_ephemeral_session_key()
                .expect("ephemeral flag")
        );
    }

    #[rstest]
    #[case(Some("not-an-address"), true)]
    #[case(Some(" 127.0.0.1:80 "), false)]
    fn bind_addr_is_validated(#[case] raw: Option<&str>, #[case] fails: bool) {
        let settings = ServerSettings {
            bind_addr: raw.map(str::to_owned),
            database_url: None,
            db_pool_size: None,
            session_key_file: None,
            cookie_secure: None,
            allow_ephemeral_session_key: None,
        };

        assert_eq!(settings.bind_addr().is_err(), fails);
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some("postgres://db/x"), Some("postgres://db/x"))]
    fn blank_database_url_means_in_memory(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = ServerSettings {
            bind_addr: None,
            database_url: raw.map(str::to_owned),
            db_pool_size: Some(0),
            session_key_file: None,
            cookie_secure: None,
            allow_ephemeral_session_key: None,
        };

        assert_eq!(settings.database_url(), expected);
        assert!(matches!(settings.db_pool_size(), Err(SettingsError::EmptyPool)));
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("  "), true)]
    #[case(Some("false"), false)]
    #[case(Some("OFF"), false)]
    #[case(Some("1"), true)]
    fn cookie_secure_defaults_on_and_accepts_common_spellings(
        #[case] raw: Option<&str>,
        #[case] expected: bool,
    ) {
        let settings = ServerSettings {
            bind_addr: None,
            database_url: None,
            db_pool_size: None,
            session_key_file: None,
            cookie_secure: raw.map(str::to_owned),
            allow_ephemeral_session_key: None,
        };

        assert_eq!(settings.cookie_secure().expect("valid flag"), expected);
        assert!(
            !settings
                .allow_ephemeral_session_key()
                .expect("default flag")
        );
    }

    #[rstest]
    fn unrecognised_switch_values_are_rejected() {
        let settings = ServerSettings {
            bind_addr: None,
            database_url: None,
            db_pool_size: None,
            session_key_file: None,
            cookie_secure: None,
            allow_ephemeral_session_key: Some("maybe".to_owned()),
        };

        assert!(matches!(
            settings.allow_ephemeral_session_key(),
            Err(SettingsError::InvalidFlag {
                name: "allow_ephemeral_session_key",
                ..
            })
        ));
    }
}
