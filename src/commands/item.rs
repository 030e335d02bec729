//! Item Endpoints
//!
//! `ItemsBackend` over `/api/items`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use item_sync::{ApiError, ApiResult, ClientConfig, CreatedItem, Item, ItemId, ItemsBackend, NewItem};

use super::{body_text, send};

pub struct HttpItemsBackend {
    config: ClientConfig,
}

impl HttpItemsBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }
}

fn to_json(item: &NewItem) -> ApiResult<String> {
    serde_json::to_string(item).map_err(|e| ApiError::Decode(e.to_string()))
}

fn from_json<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ItemsBackend for HttpItemsBackend {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let resp = send("GET", &self.config.items_url(), None).await?;
        from_json(&body_text(&resp).await?)
    }

    async fn create(&self, item: &NewItem) -> ApiResult<Item> {
        let resp = send("POST", &self.config.items_url(), Some(to_json(item)?)).await?;
        let created: CreatedItem = from_json(&body_text(&resp).await?)?;
        Ok(created.into_item())
    }

    async fn update(&self, id: &ItemId, item: &NewItem) -> ApiResult<()> {
        // Body, if any, is not needed.
        send("PUT", &self.config.item_url(id), Some(to_json(item)?)).await?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        send("DELETE", &self.config.item_url(id), None).await?;
        Ok(())
    }
}
