//! Builders wiring the item store into HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use listings_backend::domain::ItemsService;
use listings_backend::inbound::http::state::HttpState;
use listings_backend::outbound::persistence::MongoItemRepository;

use super::ServerConfig;

/// Build handler state backed by the MongoDB item repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(MongoItemRepository::new(config.items.clone()));
    let service = Arc::new(ItemsService::new(repository, Arc::new(DefaultClock)));
    web::Data::new(HttpState::new(service.clone(), service))
}
