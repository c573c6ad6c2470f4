//! HTTP server configuration object.

use std::net::SocketAddr;

use listings_backend::outbound::persistence::ItemDocument;
use mongodb::Collection;

/// Settings and handles needed to create the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) items: Collection<ItemDocument>,
}

impl ServerConfig {
    /// Construct a server configuration over a prepared item collection.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, items: Collection<ItemDocument>) -> Self {
        Self { bind_addr, items }
    }
}
