//! Browser View
//!
//! `ItemView` backed by the reactive store. Leptos re-renders the table,
//! the form and the status line from whatever lands here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use item_sync::{Item, ItemView, Status};

use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct BrowserView {
    store: AppStore,
    status_clear_ms: u32,
}

impl BrowserView {
    pub fn new(store: AppStore, status_clear_ms: u32) -> Self {
        Self { store, status_clear_ms }
    }

    /// Clear a success/error message later, unless something newer replaced it
    fn schedule_clear(&self, ticket: u32) {
        let store = self.store;
        let delay = self.status_clear_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store.status().update(|slot| {
                slot.clear(ticket);
            });
        });
    }
}

impl ItemView for BrowserView {
    fn render(&self, items: &[Item]) {
        self.store.items().set(items.to_vec());
    }

    fn show_status(&self, status: Status) {
        let mut ticket = None;
        self.store.status().update(|slot| ticket = slot.set(status));

        if let Some(ticket) = ticket.filter(|_| self.status_clear_ms > 0) {
            self.schedule_clear(ticket);
        }
    }

    fn fill_form(&self, item: &Item) {
        self.store.form_name().set(item.name.clone());
        self.store.editing().set(Some(item.id.clone()));
    }

    fn reset_form(&self) {
        self.store.form_name().set(String::new());
        self.store.editing().set(None);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
