//! Integration tests for the Seities storefront.
//!
//! The full router, middleware included, is driven in-process with
//! `tower::ServiceExt::oneshot` over an in-memory session store. No server,
//! database or network is needed.
//!
//! ```bash
//! cargo test -p seities-integration-tests
//! ```

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use seities_storefront::config::StorefrontConfig;
use seities_storefront::state::AppState;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

/// One visitor talking to the storefront, carrying its session cookie.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// A response header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Storefront with local defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::local())
    }

    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config, None);
        Self {
            router: seities_storefront::app(state, MemoryStore::default()),
            cookie: None,
        }
    }

    /// A second visitor on the same storefront, without a session.
    #[must_use]
    pub fn visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Send a request, attaching and then updating the session cookie.
    ///
    /// # Panics
    ///
    /// Panics if the stored cookie is not a valid header value or the body
    /// cannot be read.
    pub async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request.headers_mut().insert(
                COOKIE,
                HeaderValue::from_str(cookie).expect("session cookie is a valid header"),
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body is readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn post_json(&mut self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// POST an empty form, as the "Shop Again" button does.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn post_form(&mut self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }
}

/// The sample order used across tests.
pub const SAMPLE_RECEIPT: &str = r#"{
    "customer_reference": "ORD-1",
    "customer": { "email": "a@b.com" },
    "order": {
        "line_items": [
            {
                "id": 1,
                "product_name": "Tee",
                "variants": [{ "option_name": "M" }],
                "quantity": 2,
                "line_total": { "formatted_with_symbol": "$20.00" }
            }
        ],
        "shipping": { "price": { "formatted_with_symbol": "$5.00" } },
        "total": { "formatted_with_symbol": "$25.00" }
    },
    "shipping": {
        "name": "A",
        "street": "1 Rd",
        "town_city": "X",
        "county_state": "Y",
        "postal_zip_code": "000",
        "country": "Z"
    }
}"#;
