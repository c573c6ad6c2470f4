//! Server settings loaded via OrthoConfig.
//!
//! Every value may be supplied on the command line or through a
//! `LISTINGS_`-prefixed environment variable, for example
//! `LISTINGS_MONGODB_URI`. Unset values fall back to local development
//! defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::StoreConfig;

/// Default listener address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Default MongoDB connection string.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
/// Default database name.
pub const DEFAULT_DATABASE: &str = "itemsDB";
/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "items";
/// Default wait, in seconds, for a reachable MongoDB server.
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 10;

/// Errors raised when settings hold unusable values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Configuration values for the HTTP server and its item store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LISTINGS")]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the item collection.
    pub database: Option<String>,
    /// Item collection name.
    pub collection: Option<String>,
    /// Seconds store operations wait for a reachable server.
    #[ortho_config(default = 10)]
    pub server_selection_timeout_secs: u64,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the configured connection string, falling back to the default.
    pub fn mongodb_uri(&self) -> &str {
        self.mongodb_uri.as_deref().unwrap_or(DEFAULT_MONGODB_URI)
    }

    /// Return the configured database name, falling back to the default.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Return the configured collection name, falling back to the default.
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    /// Build the item store configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.mongodb_uri(), self.database(), self.collection())
            .with_server_selection_timeout(Duration::from_secs(self.server_selection_timeout_secs))
    }
}
