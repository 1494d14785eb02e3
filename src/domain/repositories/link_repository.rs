//! Repository trait for short link data access.

use crate::domain::entities::{LinkUpdate, NewLink, StoredLink, StoredLinkStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence gateway for the `urls` table.
///
/// Each method is a single statement; no method opens a transaction that
/// spans calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the created row with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a short code
    /// that already exists.
    async fn insert(&self, new_link: NewLink) -> Result<StoredLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(StoredLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<StoredLink>, AppError>;

    /// Finds a link by its short code, including the access counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_stats_by_code(&self, code: &str) -> Result<Option<StoredLinkStats>, AppError>;

    /// Replaces the destination URL and update time of a link.
    ///
    /// Returns the updated row, or `Ok(None)` if no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn update_by_code(
        &self,
        code: &str,
        update: LinkUpdate,
    ) -> Result<Option<StoredLink>, AppError>;

    /// Adds one to the access counter of a link.
    ///
    /// Returns `Ok(false)` if no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn increment_access_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Removes a link.
    ///
    /// Returns `Ok(false)` if no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
