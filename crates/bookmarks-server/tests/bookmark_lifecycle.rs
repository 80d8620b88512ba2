//! End-to-end bookmark lifecycle over a real socket.
//!
//! Each test starts the full application on an ephemeral local port and talks
//! to it with an HTTP client, the way a deployed client would.

use bookmarks_server::{AppState, Environment, ServerConfig, routes};
use bookmarks_store::BookmarkStore;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const TOKEN: &str = "integration-secret";

// ============================================================================
// API Types (matching server responses)
// ============================================================================

#[derive(Debug, Serialize)]
struct CreateBookmarkRequest {
    title: String,
    url: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct BookmarkData {
    id: String,
    title: String,
    url: String,
    description: String,
    rating: serde_json::Value,
}

// ============================================================================
// Helpers
// ============================================================================

struct TestServer {
    base_url: String,
    state: AppState,
    client: Client,
}

impl TestServer {
    async fn start(environment: Environment) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let config = ServerConfig {
            api_token: Some(TOKEN.to_string()),
            environment,
            port: addr.port(),
            public_url: base_url.clone(),
            ..ServerConfig::default()
        };
        let state = AppState::new(BookmarkStore::new(), config);
        let app = routes::build_app(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            state,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, request: &CreateBookmarkRequest) -> reqwest::Response {
        self.client
            .post(self.url("/bookmarks"))
            .bearer_auth(TOKEN)
            .json(request)
            .send()
            .await
            .unwrap()
    }
}

fn sample(title: &str) -> CreateBookmarkRequest {
    CreateBookmarkRequest {
        title: title.to_string(),
        url: format!("https://example.com/{title}"),
        description: format!("All about {title}"),
        rating: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn create_fetch_list_delete() {
    let server = TestServer::start(Environment::Test).await;

    // Create two bookmarks
    let response = server
        .create(&CreateBookmarkRequest {
            rating: Some(4),
            ..sample("tokio")
        })
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let first: BookmarkData = response.json().await.unwrap();
    assert_eq!(location, server.url(&format!("/bookmark/{}", first.id)));
    assert_eq!(first.rating, serde_json::json!(4));

    let second: BookmarkData = server.create(&sample("axum")).await.json().await.unwrap();
    assert_eq!(second.rating, serde_json::json!(0));
    assert_ne!(first.id, second.id);

    // Fetch via the Location header
    let fetched: BookmarkData = server
        .client
        .get(&location)
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, first);

    // List keeps insertion order
    let listed: Vec<BookmarkData> = server
        .client
        .get(server.url("/bookmarks"))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    // Delete the first, then again
    let delete_url = server.url(&format!("/bookmark/{}", first.id));
    let response = server
        .client
        .delete(&delete_url)
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(server.state.store().len().await, 1);

    let response = server
        .client
        .delete(&delete_url)
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Bookmark not found");

    let response = server
        .client
        .get(&delete_url)
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_do_not_touch_the_store() {
    let server = TestServer::start(Environment::Test).await;

    for payload in [
        serde_json::json!({ "url": "u", "description": "d" }),
        serde_json::json!({ "title": "t", "description": "d" }),
        serde_json::json!({ "title": "t", "url": "u" }),
        serde_json::json!({ "title": "", "url": "u", "description": "d" }),
    ] {
        let response = server
            .client
            .post(server.url("/bookmarks"))
            .bearer_auth(TOKEN)
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.text().await.unwrap(), "Invalid data");
    }

    assert!(server.state.store().is_empty().await);
}

#[tokio::test]
async fn requests_without_valid_token_are_rejected() {
    let server = TestServer::start(Environment::Production).await;

    let no_header = server
        .client
        .post(server.url("/bookmarks"))
        .json(&sample("x"))
        .send()
        .await
        .unwrap();
    assert_eq!(no_header.status(), StatusCode::UNAUTHORIZED);

    let wrong = server
        .client
        .get(server.url("/bookmarks"))
        .bearer_auth("not-the-token")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = wrong.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Unauthorized request" }));

    assert!(server.state.store().is_empty().await);
}
