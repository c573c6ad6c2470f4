//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ItemsCommand, ItemsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemsCommand>,
    pub items_query: Arc<dyn ItemsQuery>,
}

impl HttpState {
    /// Construct state from the item ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use listings_backend::domain::ItemsService;
    /// use listings_backend::inbound::http::state::HttpState;
    /// use listings_backend::test_support::InMemoryItemRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(ItemsService::new(
    ///     Arc::new(InMemoryItemRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.items_query.clone();
    /// ```
    pub fn new(items: Arc<dyn ItemsCommand>, items_query: Arc<dyn ItemsQuery>) -> Self {
        Self { items, items_query }
    }
}
