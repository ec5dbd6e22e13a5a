//! HTTP layer of the MauriRent backend
//!
//! Exposes the booking engine and checkout flow over actix-web. The library
//! target exists so integration tests can build the same `App` as the
//! binary.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
