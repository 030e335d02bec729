//! Item Sync
//!
//! Keeps a local list of named items in step with a REST backend:
//! - domain: Items and request bodies as they travel over the wire
//! - backend / view: the seams to the network and to the page
//! - client: load, create, update, delete and edit selection

mod backend;
mod client;
mod config;
mod domain;
mod error;
mod status;
mod view;

pub use backend::ItemsBackend;
pub use client::{validate_name, ItemSyncClient};
pub use config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_STATUS_CLEAR_MS};
pub use domain::{CreatedItem, Item, ItemId, NewItem};
pub use error::{check_status, ApiError, ApiResult, ConfigError, SyncError, SyncResult};
pub use status::{Operation, Status, StatusSlot};
pub use view::ItemView;
