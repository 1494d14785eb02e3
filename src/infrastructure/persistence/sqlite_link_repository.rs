//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{LinkUpdate, NewLink, StoredLink, StoredLinkStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every query that returns a link without its counter.
#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    url: String,
    shortcode: String,
    createdat: Option<String>,
    updatedat: Option<String>,
}

impl From<LinkRow> for StoredLink {
    fn from(row: LinkRow) -> Self {
        StoredLink {
            id: row.id,
            url: row.url,
            short_code: row.shortcode,
            created_at: row.createdat,
            updated_at: row.updatedat,
        }
    }
}

#[derive(Debug, FromRow)]
struct LinkStatsRow {
    #[sqlx(flatten)]
    link: LinkRow,
    accesscount: Option<i64>,
}

impl From<LinkStatsRow> for StoredLinkStats {
    fn from(row: LinkStatsRow) -> Self {
        StoredLinkStats {
            link: row.link.into(),
            access_count: row.accesscount,
        }
    }
}

/// SQLite repository for the `urls` table.
///
/// Uses bound parameters for every value; statements are single-row and
/// rely on SQLite's own locking for concurrent writers.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<StoredLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO urls (url, shortcode, createdat)
            VALUES (?1, ?2, ?3)
            RETURNING id, url, shortcode, createdat, updatedat
            "#,
        )
        .bind(new_link.url)
        .bind(new_link.short_code)
        .bind(new_link.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<StoredLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, url, shortcode, createdat, updatedat
            FROM urls
            WHERE shortcode = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_stats_by_code(&self, code: &str) -> Result<Option<StoredLinkStats>, AppError> {
        let row = sqlx::query_as::<_, LinkStatsRow>(
            r#"
            SELECT id, url, shortcode, createdat, updatedat, accesscount
            FROM urls
            WHERE shortcode = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_by_code(
        &self,
        code: &str,
        update: LinkUpdate,
    ) -> Result<Option<StoredLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE urls
            SET url = ?1, updatedat = ?2
            WHERE shortcode = ?3
            RETURNING id, url, shortcode, createdat, updatedat
            "#,
        )
        .bind(update.url)
        .bind(update.updated_at)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_access_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET accesscount = COALESCE(accesscount, 0) + 1
            WHERE shortcode = ?1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE shortcode = ?1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
