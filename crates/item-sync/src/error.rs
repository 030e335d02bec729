//! Error types
//!
//! `ApiError` is what a backend reports; `SyncError` is what ends up on the
//! status line.

use crate::domain::ItemId;

/// Failure reported by an [`ItemsBackend`](crate::ItemsBackend)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Map an HTTP status to success (2xx) or `ApiError::Status`
pub fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// User-facing failure of a client operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("Items not found.")]
    NotFound,

    #[error("Network response was not ok")]
    LoadFailed,

    #[error("An error occurred: {0}")]
    Network(String),

    #[error("Failed to create item")]
    CreateFailed,

    #[error("Failed to update item")]
    UpdateFailed,

    #[error("Failed to delete item")]
    DeleteFailed,

    #[error("Item name cannot be empty.")]
    EmptyName,

    #[error("Item {0} is no longer in the list")]
    UnknownItem(ItemId),
}

impl SyncError {
    /// Classify a failed list request.
    ///
    /// 404 is the only status called out by name.
    pub fn from_load(err: &ApiError) -> Self {
        match err {
            err if err.is_not_found() => SyncError::NotFound,
            ApiError::Status(_) => SyncError::LoadFailed,
            ApiError::Network(msg) | ApiError::Decode(msg) => SyncError::Network(msg.clone()),
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Invalid configuration override
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("`{0}` must not be empty")]
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_classification() {
        assert_eq!(SyncError::from_load(&ApiError::Status(404)), SyncError::NotFound);
        assert_eq!(SyncError::from_load(&ApiError::Status(500)), SyncError::LoadFailed);
        assert_eq!(
            SyncError::from_load(&ApiError::Network("Failed to fetch".into())),
            SyncError::Network("Failed to fetch".into())
        );
    }

    #[test]
    fn test_check_status() {
        for ok in [200, 201, 204] {
            assert_eq!(check_status(ok), Ok(()));
        }
        for failed in [304, 400, 404, 500] {
            assert_eq!(check_status(failed), Err(ApiError::Status(failed)));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(SyncError::NotFound.to_string(), "Items not found.");
        assert_eq!(
            SyncError::Network("Failed to fetch".into()).to_string(),
            "An error occurred: Failed to fetch"
        );
        assert!(ApiError::Status(404).is_not_found());
        assert!(!ApiError::Status(500).is_not_found());
    }
}
