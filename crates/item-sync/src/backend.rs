//! Backend Seam
//!
//! Abstract interface to the items REST API.
//! The browser shell talks HTTP; tests use an in-memory fake.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, NewItem};
use crate::error::ApiResult;

/// CRUD operations against `/api/items`
///
/// Futures are not `Send`: implementations run on the browser's single thread.
#[async_trait(?Send)]
pub trait ItemsBackend {
    /// `GET /api/items`
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /api/items`, returns the stored item with its assigned id
    async fn create(&self, item: &NewItem) -> ApiResult<Item>;

    /// `PUT /api/items/{id}`
    async fn update(&self, id: &ItemId, item: &NewItem) -> ApiResult<()>;

    /// `DELETE /api/items/{id}`
    async fn delete(&self, id: &ItemId) -> ApiResult<()>;
}
