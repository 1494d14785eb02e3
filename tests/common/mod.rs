#![allow(dead_code)]

use axum_test::TestServer;
use shortener::application::services::LinkService;
use shortener::infrastructure::persistence::SqliteLinkRepository;
use shortener::routes::app_router;
use shortener::state::AppState;
use shortener::utils::code_generator::CodeGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const CREATED_AT: &str = "2024-05-01T10:00:00.000Z";

/// State wired to the test pool with a deterministic code generator.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repo, CodeGenerator::with_seed(6, 42)));

    AppState::new(link_service)
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (url, shortcode, createdat) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(CREATED_AT)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a row whose timestamps bypass the codec, to simulate corrupted data.
pub async fn create_raw_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: Option<&str>,
    access_count: Option<i64>,
) {
    sqlx::query("INSERT INTO urls (url, shortcode, createdat, accesscount) VALUES (?1, ?2, ?3, ?4)")
        .bind(url)
        .bind(code)
        .bind(created_at)
        .bind(access_count)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn access_count(pool: &SqlitePool, code: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT accesscount FROM urls WHERE shortcode = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
