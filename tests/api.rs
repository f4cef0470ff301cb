//! End-to-end tests against a live server.

use collectible_store::StoreConfig;
use reqwest::{header, Method, StatusCode};

mod common;

#[tokio::test]
async fn test_user_endpoints_over_http() {
    let server = common::start_server(StoreConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.expect("server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Welcome to the Collectible Store API!");

    let res = client.get(server.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    let users: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        users,
        serde_json::json!([{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}])
    );

    let res = client.get(server.url("/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"id": 1, "name": "Alice"}"#);

    let res = client.get(server.url("/users/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), r#"{"message": "User not found"}"#);

    server.stop().await;
}

#[tokio::test]
async fn test_writes_are_echoed_not_stored() {
    let server = common::start_server(StoreConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.url("/users"))
        .body(r#"{"name":"Carlos"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    let body = res.text().await.unwrap();
    assert!(body.contains(r#""id": 3"#));
    assert!(body.contains(r#""receivedData": {"name":"Carlos"}"#));

    let res = client
        .put(server.url("/users/12"))
        .body(r#"{"name": "Nobody"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["message"], "User 12 updated successfully");
    assert_eq!(updated["updatedData"]["name"], "Nobody");

    let res = client.delete(server.url("/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.text().await.unwrap().is_empty());

    // Alice survives the delete
    let res = client.get(server.url("/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn test_options_reports_allowed_methods() {
    let server = common::start_server(StoreConfig::default()).await;
    let client = common::client();

    let res = client
        .request(Method::OPTIONS, server.url("/users/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::ALLOW], "GET, POST, PUT, DELETE, OPTIONS");

    let res = client
        .request(Method::OPTIONS, server.url("/users/5"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key(header::ALLOW));

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_reads() {
    let server = common::start_server(StoreConfig::default()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = server.url(if i % 2 == 0 { "/users/1" } else { "/users/2" });
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.map(|r| r.status())
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), StatusCode::OK);
    }

    server.stop().await;
}
