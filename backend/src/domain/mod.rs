//! Domain primitives, services, and ports.
//!
//! Purpose: Define the item listing model, its validation rules, and the
//! service that drives the item store through ports. Nothing in this module
//! knows about HTTP or MongoDB.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload and stable codes.
//! - Item, ItemId, ItemFields, ItemChanges, ItemDraft, NewItem: the listing model.
//! - ItemsService: implementation of the item driving ports.

pub mod error;
pub mod item;
mod items_service;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::item::{
    Item, ItemChanges, ItemDraft, ItemFields, ItemId, ItemValidationError, MANDATORY_FIELDS,
    NewItem,
};
pub use self::items_service::ItemsService;
