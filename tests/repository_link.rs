mod common;

use shortener::AppError;
use shortener::domain::entities::{LinkUpdate, NewLink};
use shortener::domain::repositories::LinkRepository;
use shortener::infrastructure::persistence::SqliteLinkRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn repo(pool: &SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(pool.clone()))
}

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        url: url.to_string(),
        short_code: code.to_string(),
        created_at: common::CREATED_AT.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_link(pool: SqlitePool) {
    let repo = repo(&pool);

    let stored = repo
        .insert(new_link("test12", "https://example.com"))
        .await
        .unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.short_code, "test12");
    assert_eq!(stored.url, "https://example.com");
    assert_eq!(stored.created_at.as_deref(), Some(common::CREATED_AT));
    assert!(stored.updated_at.is_none());
}

#[sqlx::test]
async fn test_insert_assigns_increasing_ids(pool: SqlitePool) {
    let repo = repo(&pool);

    let first = repo.insert(new_link("aaaaaa", "https://a.com")).await.unwrap();
    let second = repo.insert(new_link("bbbbbb", "https://b.com")).await.unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_store_error(pool: SqlitePool) {
    let repo = repo(&pool);

    repo.insert(new_link("dup001", "https://a.com")).await.unwrap();
    let result = repo.insert(new_link("dup001", "https://b.com")).await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert_eq!(common::link_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let found = repo(&pool).find_by_code("abc123").await.unwrap();

    let link = found.expect("link should exist");
    assert_eq!(link.short_code, "abc123");
    assert_eq!(link.url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: SqlitePool) {
    let found = repo(&pool).find_by_code("nothere").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_stats_by_code_null_count(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let stats = repo(&pool)
        .find_stats_by_code("abc123")
        .await
        .unwrap()
        .expect("link should exist");

    assert_eq!(stats.link.short_code, "abc123");
    assert_eq!(stats.access_count, None);
}

#[sqlx::test]
async fn test_increment_access(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = repo(&pool);

    assert!(repo.increment_access_by_code("abc123").await.unwrap());
    assert!(repo.increment_access_by_code("abc123").await.unwrap());

    let stats = repo.find_stats_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(stats.access_count, Some(2));
}

#[sqlx::test]
async fn test_increment_access_unknown_code(pool: SqlitePool) {
    assert!(!repo(&pool).increment_access_by_code("nothere").await.unwrap());
}

#[sqlx::test]
async fn test_update_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let updated = repo(&pool)
        .update_by_code(
            "abc123",
            LinkUpdate {
                url: "https://www.rust-lang.org".to_string(),
                updated_at: "2024-06-01T12:00:00.000Z".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("link should exist");

    assert_eq!(updated.url, "https://www.rust-lang.org");
    assert_eq!(updated.created_at.as_deref(), Some(common::CREATED_AT));
    assert_eq!(
        updated.updated_at.as_deref(),
        Some("2024-06-01T12:00:00.000Z")
    );
}

#[sqlx::test]
async fn test_update_by_code_not_found(pool: SqlitePool) {
    let updated = repo(&pool)
        .update_by_code(
            "nothere",
            LinkUpdate {
                url: "https://www.rust-lang.org".to_string(),
                updated_at: "2024-06-01T12:00:00.000Z".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[sqlx::test]
async fn test_delete_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    common::create_test_link(&pool, "keep01", "https://example.org").await;
    let repo = repo(&pool);

    assert!(repo.delete_by_code("abc123").await.unwrap());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    assert!(repo.find_by_code("keep01").await.unwrap().is_some());

    assert!(!repo.delete_by_code("abc123").await.unwrap());
}

#[sqlx::test]
async fn test_ping(pool: SqlitePool) {
    assert!(repo(&pool).ping().await.is_ok());
}
