//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the router around a
//! match engine with a known corpus and a scripted random source, so every
//! response is deterministic.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use quotecho_core::{
    testing::{fixtures, SequenceRandom},
    Config, Corpus, MatchEngine, MatchSettings, MatcherConfig,
};
use quotecho_server::{api::create_router, state::AppState};

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_random_quote() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.get("/api/v1/quotes/random").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Scripted random source - inspect picks
    pub rng: Arc<SequenceRandom>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Fixture over the sample dialogue corpus with default settings.
    pub fn new() -> Self {
        Self::with_config(TestConfig::default())
    }

    /// Fixture with custom configuration.
    pub fn with_config(test_config: TestConfig) -> Self {
        let corpus = test_config
            .corpus
            .unwrap_or_else(fixtures::dialogue_corpus);

        let config = Config {
            matcher: MatcherConfig {
                auto_reply: test_config.auto_reply,
                min_words_to_match: test_config.min_words_to_match,
                seed: None,
            },
            ..Default::default()
        };

        let rng = Arc::new(SequenceRandom::new(test_config.random_script));
        let engine = MatchEngine::new(
            Arc::new(corpus),
            MatchSettings::from(&config.matcher),
            rng.clone(),
        )
        .expect("Failed to create engine");

        let state = Arc::new(AppState::new(config, Arc::new(engine)));
        let router = create_router(state);

        Self { router, rng }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Corpus to serve (defaults to the sample dialogue)
    pub corpus: Option<Corpus>,
    pub auto_reply: bool,
    pub min_words_to_match: usize,
    /// Indices the random source returns, in order
    pub random_script: Vec<usize>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            corpus: None,
            auto_reply: true,
            min_words_to_match: 3,
            random_script: vec![0],
        }
    }
}

impl TestConfig {
    /// Config with an empty corpus.
    pub fn empty_corpus() -> Self {
        Self {
            corpus: Some(Corpus::default()),
            ..Default::default()
        }
    }

    /// Config with auto-reply turned off.
    pub fn auto_reply_disabled() -> Self {
        Self {
            auto_reply: false,
            ..Default::default()
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
