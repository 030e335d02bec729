//! View Seam
//!
//! Everything the client needs from the page: the table, the form,
//! the status line and a yes/no prompt.

use crate::domain::Item;
use crate::status::Status;

pub trait ItemView {
    /// Rebuild the table from scratch
    fn render(&self, items: &[Item]);

    fn show_status(&self, status: Status);

    /// Load an item into the form for editing
    fn fill_form(&self, item: &Item);

    /// Empty the name field and drop the hidden id
    fn reset_form(&self);

    /// Ask the user to confirm; `false` aborts the action
    fn confirm(&self, message: &str) -> bool;
}
