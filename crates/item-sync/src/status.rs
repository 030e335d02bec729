//! Status line messages

use std::fmt;

use crate::error::SyncError;

/// The mutation or fetch a status refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

/// Contents of the single status line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Progress(Operation),
    Success(Operation),
    Error(SyncError),
}

impl Status {
    /// CSS modifier for the status line
    pub fn kind(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Progress(_) => "progress",
            Status::Success(_) => "success",
            Status::Error(_) => "error",
        }
    }

    /// Success and error messages clear themselves after a while; progress
    /// stays until the operation finishes.
    pub fn is_transient(&self) -> bool {
        matches!(self, Status::Success(_) | Status::Error(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Progress(Operation::Load) => f.write_str("Loading items..."),
            Status::Progress(Operation::Create) => f.write_str("Creating a new item..."),
            Status::Progress(Operation::Update) => f.write_str("Updating the item..."),
            Status::Progress(Operation::Delete) => f.write_str("Deleting the item..."),
            Status::Success(Operation::Load) => f.write_str("Items loaded."),
            Status::Success(Operation::Create) => f.write_str("Item created successfully!"),
            Status::Success(Operation::Update) => f.write_str("Item updated successfully!"),
            Status::Success(Operation::Delete) => f.write_str("Item deleted successfully!"),
            Status::Error(err) => write!(f, "{}", err),
        }
    }
}

/// The status line plus a change counter
///
/// Every `set` bumps the version. A transient status hands back that version
/// as a ticket; a delayed clear only succeeds while the ticket is current,
/// so a newer message is never wiped by an older timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSlot {
    status: Status,
    version: u32,
}

impl StatusSlot {
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Replace the status; returns a clear ticket for transient ones
    pub fn set(&mut self, status: Status) -> Option<u32> {
        self.version = self.version.wrapping_add(1);
        let transient = status.is_transient();
        self.status = status;
        transient.then_some(self.version)
    }

    /// Reset to idle if nothing replaced the status since `ticket` was issued
    pub fn clear(&mut self, ticket: u32) -> bool {
        if ticket != self.version {
            return false;
        }
        self.status = Status::Idle;
        true
    }
}
