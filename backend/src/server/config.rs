//! HTTP server configuration object and helpers.

use std::io;
use std::net::SocketAddr;
use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use leaderboard::outbound::persistence::DbPool;
use tracing::warn;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database pool. Without one the server stores users and
    /// claims in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

/// Read session key material from `path`.
///
/// When the file is unreadable a random key is generated if `allow_ephemeral`
/// is set or the build has debug assertions; sessions then do not survive a
/// restart.
///
/// # Errors
/// Returns [`io::Error`] when the key cannot be read and no fallback applies,
/// or when the file holds fewer than 32 bytes.
pub fn load_session_key(path: &Path, allow_ephemeral: bool) -> io::Result<Key> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.len() < 32 => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "session key at {} must hold at least 32 bytes",
                path.display()
            ),
        )),
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(error) if allow_ephemeral || cfg!(debug_assertions) => {
            warn!(path = %path.display(), %error, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(error) => Err(io::Error::other(format!(
            "failed to read session key at {}: {error}",
            path.display()
        ))),
    }
}
