//! UI Components
//!
//! Leptos components for the items page.

mod item_form;
mod item_table;
mod status_line;

pub use item_form::ItemForm;
pub use item_table::ItemTable;
pub use status_line::StatusLine;
