//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Written only through `BrowserView`; components read it.

use reactive_stores::Store;

use item_sync::{Item, ItemId, StatusSlot};

/// Page state mirrored from the sync client
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows of the table, in server order
    pub items: Vec<Item>,
    /// Status line contents, versioned for delayed clears
    pub status: StatusSlot,
    /// Name input
    pub form_name: String,
    /// Hidden id of the item being edited (None = create)
    pub editing: Option<ItemId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
