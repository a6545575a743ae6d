//! Shared helpers for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p quickjustice-server -- --ignored

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use quickjustice_server::build_router;
use quickjustice_server::db::create_pool;
use serde_json::Value;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tower::ServiceExt;
use uuid::Uuid;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// Pool against `DATABASE_URL` with the reference schema applied once.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(url.parse().expect("bad DATABASE_URL"), 5)
        .await
        .expect("pool creation failed");

    SCHEMA
        .get_or_init(|| async {
            sqlx::raw_sql(include_str!("../../../sql/schema.sql"))
                .execute(&pool)
                .await
                .expect("schema setup failed");
        })
        .await;

    pool
}

/// App over a fresh schema that uses the column types of older deployments:
/// `NUMERIC` amounts and `TIMESTAMP` without time zone.
pub async fn legacy_app(tag: &str) -> Router {
    let pool = test_pool().await;
    let schema = format!("legacy_{tag}");
    sqlx::raw_sql(&format!("CREATE SCHEMA {schema}"))
        .execute(&pool)
        .await
        .expect("schema creation failed");

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let options: PgConnectOptions = url.parse().expect("bad DATABASE_URL");
    let legacy = create_pool(options.options([("search_path", schema.as_str())]), 2)
        .await
        .expect("pool creation failed");

    let ddl = include_str!("../../../sql/schema.sql")
        .replace("DOUBLE PRECISION", "NUMERIC(12, 2)")
        .replace("TIMESTAMPTZ", "TIMESTAMP");
    sqlx::raw_sql(&ddl)
        .execute(&legacy)
        .await
        .expect("legacy schema setup failed");

    build_router(legacy)
}

pub async fn test_app() -> (Router, PgPool) {
    let pool = test_pool().await;
    (build_router(pool.clone()), pool)
}

/// Short unique lowercase tag so parallel tests never collide.
pub fn tag() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_owned()
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn new_client(app: &Router, tag: &str) -> Value {
    let (status, client) = post(
        app,
        "/clients/",
        serde_json::json!({
            "names": "Ana",
            "lastname": format!("quispe{tag}"),
            "document_type": "DNI",
            "document_number": tag,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{client}");
    client
}

pub async fn new_lawyer(app: &Router, tag: &str) -> Value {
    let (status, lawyer) = post(
        app,
        "/lawyers/",
        serde_json::json!({
            "names": "Luis",
            "lastnames": format!("torres{tag}"),
            "field": "civil",
            "email": format!("{tag}@firm.pe"),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{lawyer}");
    lawyer
}

pub async fn new_case(app: &Router, lawyer: &Value, client: &Value, title: &str) -> Value {
    let (status, case) = post(
        app,
        "/cases/",
        serde_json::json!({
            "title": title,
            "lawyer_id": lawyer["id"],
            "client_id": client["id"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{case}");
    case
}
