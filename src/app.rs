//! Item Sync Frontend App
//!
//! Wires the sync client to the page and lays out form, status line and table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use item_sync::ItemSyncClient;

use crate::commands::HttpItemsBackend;
use crate::components::{ItemForm, ItemTable, StatusLine};
use crate::config;
use crate::context::AppContext;
use crate::store::AppState;
use crate::view::BrowserView;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    let store = Store::new(AppState::default());
    let client = ItemSyncClient::new(
        HttpItemsBackend::new(&config),
        BrowserView::new(store, config.status_clear_ms),
    );

    // Provide context to all children
    let ctx = AppContext::new(store, client);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.load().await;
        });
    });

    view! {
        <main class="container">
            <h1>"Items"</h1>
            <ItemForm />
            <StatusLine />
            <ItemTable />
        </main>
    }
}
