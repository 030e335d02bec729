//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use item_sync::ItemSyncClient;

use crate::commands::HttpItemsBackend;
use crate::store::AppStore;
use crate::view::BrowserView;

pub type UiClient = ItemSyncClient<HttpItemsBackend, BrowserView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page state the components render from
    pub store: AppStore,
    /// The sync client lives on the main thread only
    client: StoredValue<Rc<UiClient>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, client: UiClient) -> Self {
        Self {
            store,
            client: StoredValue::new_local(Rc::new(client)),
        }
    }

    pub fn client(&self) -> Rc<UiClient> {
        self.client.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
