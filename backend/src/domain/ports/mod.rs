//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod item_repository;
mod items_command;
mod items_query;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{DeleteOutcome, ItemRepository, ItemRepositoryError, UpdateOutcome};
#[cfg(test)]
pub use items_command::MockItemsCommand;
pub use items_command::ItemsCommand;
#[cfg(test)]
pub use items_query::MockItemsQuery;
pub use items_query::ItemsQuery;
