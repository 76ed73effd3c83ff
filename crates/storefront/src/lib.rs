//! Seities storefront library.
//!
//! The checkout confirmation pages as a library, so the router can be
//! driven in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use app::app;
