//! Link lifecycle service: create, resolve, update, delete and stats.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::entities::{Link, LinkStats, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::timestamp::format_timestamp;
use crate::utils::url_validator::validate_url;

/// Service owning the business rules of short links.
///
/// Every operation is a direct round trip to the repository; nothing is
/// cached and no transaction spans more than one repository call.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_generator: CodeGenerator,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, code_generator: CodeGenerator) -> Self {
        Self {
            link_repository,
            code_generator,
        }
    }

    /// Shortens `url`.
    ///
    /// The URL is validated before anything touches the store. The generated
    /// code is not checked for uniqueness; a collision is reported by the
    /// store as [`AppError::Store`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is not an absolute URL.
    /// Returns [`AppError::Store`] on persistence failure.
    pub async fn create_short_link(&self, url: String) -> Result<Link, AppError> {
        validate_url(&url)?;

        let short_code = self.code_generator.generate();
        let created_at = now();

        let stored = self
            .link_repository
            .insert(NewLink {
                url,
                short_code,
                created_at: format_timestamp(&created_at),
            })
            .await?;

        let link = stored.into_link()?;
        tracing::info!(code = %link.short_code, id = link.id, "Short link created");

        Ok(link)
    }

    /// Resolves a short code to its link and counts the access.
    ///
    /// The lookup and the counter increment are two separate store calls. If
    /// the increment fails the whole operation fails, even though the lookup
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::DateParse`] if the stored creation time is missing
    /// or malformed.
    /// Returns [`AppError::Store`] on persistence failure.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let stored = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        if !self.link_repository.increment_access_by_code(code).await? {
            return Err(not_found(code));
        }

        tracing::debug!(code, "Short link resolved");

        Ok(stored.into_link()?)
    }

    /// Points an existing short code at `new_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `new_url` is not an absolute URL
    /// (checked before any store call).
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::DateParse`] if the stored creation time is missing
    /// or malformed.
    /// Returns [`AppError::Store`] on persistence failure.
    pub async fn update_link(&self, code: &str, new_url: String) -> Result<Link, AppError> {
        validate_url(&new_url)?;

        let updated_at = now();

        let stored = self
            .link_repository
            .update_by_code(
                code,
                LinkUpdate {
                    url: new_url,
                    updated_at: format_timestamp(&updated_at),
                },
            )
            .await?
            .ok_or_else(|| not_found(code))?;

        let mut link = stored.into_link()?;
        link.updated_at = Some(updated_at);

        tracing::info!(code, "Short link updated");

        Ok(link)
    }

    /// Removes a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist; the store is
    /// left untouched in that case.
    /// Returns [`AppError::Store`] on persistence failure.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self
            .link_repository
            .find_stats_by_code(code)
            .await?
            .is_none()
        {
            return Err(not_found(code));
        }

        if !self.link_repository.delete_by_code(code).await? {
            return Err(not_found(code));
        }

        tracing::info!(code, "Short link deleted");

        Ok(())
    }

    /// Returns a link together with its access count.
    ///
    /// Unlike [`Self::resolve`], this does not count as an access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::DateParse`] if the stored creation time is missing
    /// or malformed.
    /// Returns [`AppError::Store`] on persistence failure.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let stored = self
            .link_repository
            .find_stats_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        Ok(stored.into_stats()?)
    }

    /// Checks that the underlying store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

/// Current time at the precision the store keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn not_found(code: &str) -> AppError {
    AppError::not_found(format!("short code '{}' not found", code))
}
