//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use crate::utils::timestamp::{TimestampParseError, parse_created_and_updated};

/// A shortened URL with decoded timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            url,
            short_code,
            created_at,
            updated_at,
        }
    }
}

/// A link together with the number of times it has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub link: Link,
    pub access_count: u64,
}

/// A row of the `urls` table as the store returns it.
///
/// Timestamps are kept in their persisted text form; decoding them is the
/// link service's job so that corrupted rows fail loudly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredLink {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl StoredLink {
    /// Decodes the stored timestamps into a [`Link`].
    ///
    /// # Errors
    ///
    /// Fails if `created_at` is missing or malformed, or if `updated_at` is
    /// present but malformed.
    pub fn into_link(self) -> Result<Link, TimestampParseError> {
        let (created_at, updated_at) =
            parse_created_and_updated(self.created_at.as_deref(), self.updated_at.as_deref())?;

        Ok(Link::new(
            self.id,
            self.url,
            self.short_code,
            created_at,
            updated_at,
        ))
    }
}

/// A stored row including its raw access counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredLinkStats {
    pub link: StoredLink,
    /// `NULL` in the store reads as zero.
    pub access_count: Option<i64>,
}

impl StoredLinkStats {
    pub fn into_stats(self) -> Result<LinkStats, TimestampParseError> {
        let access_count = self.access_count.unwrap_or(0).max(0) as u64;

        Ok(LinkStats {
            link: self.link.into_link()?,
            access_count,
        })
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub short_code: String,
    /// Creation time in the persisted text layout.
    pub created_at: String,
}

/// New destination for an existing link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    pub url: String,
    /// Update time in the persisted text layout.
    pub updated_at: String,
}
