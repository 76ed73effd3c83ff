//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (recorded on the span, echoed in the response)
//! 4. Security headers (CSP, no-store, framing)
//! 5. Session layer (tower-sessions, `PostgreSQL` or in-memory store)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
