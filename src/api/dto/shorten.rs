//! DTOs for the `/shorten` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkStats};
use crate::utils::timestamp::format_timestamp;

/// Body of `POST /shorten` and `PUT /shorten/{code}`.
///
/// Only presence is checked here; URL syntax is enforced by the link
/// service so that every entry point shares one rule.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// A link as returned by create, resolve and update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            short_code: link.short_code,
            created_at: format_timestamp(&link.created_at),
            updated_at: link.updated_at.as_ref().map(format_timestamp),
        }
    }
}

/// A link with its access count, returned by `GET /shorten/{code}/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub access_count: u64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            link: stats.link.into(),
            access_count: stats.access_count,
        }
    }
}
