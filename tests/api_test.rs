//! HTTP integration tests
//!
//! Drives the axum router end to end: health check, GraphQL over POST and the
//! playground page.

use anyhow::Result;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::NamedTempFile;
use wilder_api::server::app::create_app;
use wilder_api::services::WilderService;
use wilder_api::store::SqlWilderStore;

/// Create a test server on a temporary SQLite file
async fn setup_test_server() -> Result<(TestServer, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let store = SqlWilderStore::connect(&db_url).await?;
    let service = Arc::new(WilderService::new(Arc::new(store)));

    let app = create_app(service, Some("http://localhost:3000"))?;
    let server = TestServer::new(app)?;

    Ok((server, temp_file))
}

async fn graphql(server: &TestServer, query: &str, variables: Value) -> Value {
    let response = server
        .post("/graphql")
        .json(&json!({ "query": query, "variables": variables }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (server, _temp_file) = setup_test_server().await?;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "wilder-api");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_playground_served_on_get() -> Result<()> {
    let (server, _temp_file) = setup_test_server().await?;

    let response = server.get("/graphql").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("GraphQL Playground"));

    Ok(())
}

#[tokio::test]
async fn test_wilder_crud_over_http() -> Result<()> {
    let (server, _temp_file) = setup_test_server().await?;

    let body = graphql(
        &server,
        r#"mutation Create($name: String, $city: String, $skills: [SkillInput]) {
            createOneWilder(name: $name, city: $city, skills: $skills) { _id name city skills { title votes } }
        }"#,
        json!({ "name": "Alice", "city": "Paris", "skills": [{ "title": "Go", "votes": 3 }] }),
    )
    .await;
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);

    let created = &body["data"]["createOneWilder"];
    let id = created["_id"].as_str().expect("_id should be set").to_string();
    assert_eq!(created["skills"], json!([{ "title": "Go", "votes": 3 }]));

    let body = graphql(
        &server,
        "mutation Update($id: ID!) { updateOneWilder(id: $id, name: \"Alicia\", city: \"Lyon\") }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(body["data"]["updateOneWilder"], true);

    let body = graphql(&server, "{ getAllWilders { _id name city } }", json!({})).await;
    assert_eq!(
        body["data"]["getAllWilders"],
        json!([{ "_id": id, "name": "Alicia", "city": "Lyon" }])
    );

    let body = graphql(
        &server,
        "mutation Delete($id: ID!) { deleteOneWilder(id: $id) }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(body["data"]["deleteOneWilder"], true);

    let body = graphql(
        &server,
        "query GetOne($id: ID!) { getOneWilder(id: $id) { _id } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(body["data"]["getOneWilder"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn test_store_error_is_reported_per_request() -> Result<()> {
    let (server, _temp_file) = setup_test_server().await?;

    let body = graphql(
        &server,
        "mutation { deleteOneWilder(id: \"not-a-uuid\") }",
        json!({}),
    )
    .await;

    assert_eq!(body["errors"][0]["message"], "Invalid identifier 'not-a-uuid'");
    assert_eq!(body["errors"][0]["extensions"]["code"], "INVALID_ID");

    // The failed request leaves the service usable
    let body = graphql(&server, "{ getAllWilders { _id } }", json!({})).await;
    assert_eq!(body["data"]["getAllWilders"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_answered_by_layer() -> Result<()> {
    let (server, _temp_file) = setup_test_server().await?;

    let response = server
        .method(Method::OPTIONS, "/graphql")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );

    Ok(())
}

#[tokio::test]
async fn test_invalid_cors_origin_is_rejected() -> Result<()> {
    let store = SqlWilderStore::connect("sqlite::memory:").await?;
    let service = Arc::new(WilderService::new(Arc::new(store)));

    assert!(create_app(service, Some("bad\norigin")).is_err());
    Ok(())
}
