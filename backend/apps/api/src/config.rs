//! Server configuration from environment variables

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_SESSION_TTL_HOURS: u64 = 7 * 24;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build from any key lookup
    ///
    /// Without `AUTH_SESSION_SECRET` a random secret is generated when
    /// `allow_random_secret` is set, and start-up fails otherwise.
    pub fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut auth = match lookup("AUTH_SESSION_SECRET") {
            Some(encoded) => AuthConfig {
                session_secret: decode_secret(&encoded)?,
                ..AuthConfig::default()
            },
            None if allow_random_secret => {
                tracing::warn!("AUTH_SESSION_SECRET not set; sessions will not survive a restart");
                AuthConfig::with_random_secret()
            }
            None => bail!("AUTH_SESSION_SECRET must be set"),
        };

        let ttl_hours = match lookup("AUTH_SESSION_TTL_HOURS") {
            Some(v) => v
                .parse::<u64>()
                .context("AUTH_SESSION_TTL_HOURS must be a positive integer")?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };
        if ttl_hours == 0 {
            bail!("AUTH_SESSION_TTL_HOURS must be at least 1");
        }
        auth.session_ttl = Duration::from_secs(ttl_hours * 3600);
        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            frontend_origins,
            auth,
        })
    }
}

fn decode_secret(encoded: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("AUTH_SESSION_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("AUTH_SESSION_SECRET must be 32 bytes, got {}", b.len()))
}
