//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Tools
//! GET  /tools                  - Tool directory (search, filter, sort)
//! GET  /tools/{slug}           - Tool detail
//!
//! # Compare
//! GET  /compare                - Comparison page
//! POST /compare/add            - Add a tool to the comparison
//! POST /compare/remove         - Remove a tool from the comparison
//!
//! # Tutorials
//! GET  /tutorials              - Tutorial listing
//! GET  /tutorials/{id}         - Tutorial article
//!
//! # Forms
//! GET  /submit                 - Tool submission form
//! POST /submit                 - Tool submission action
//! GET  /contact                - Contact page
//! POST /contact                - Contact action
//! POST /newsletter             - Newsletter signup (site footer)
//!
//! # Admin
//! GET  /admin                  - Login page, or dashboard when signed in
//! POST /admin/login            - Login action
//! POST /admin/logout           - Logout action
//! ```
//!
//! Unmatched paths fall through to the styled 404 page.

pub mod admin;
pub mod compare;
pub mod contact;
pub mod home;
pub mod newsletter;
pub mod submit;
pub mod tools;
pub mod tutorials;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the tool directory routes router.
pub fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tools::index))
        .route("/{slug}", get(tools::show))
}

/// Create the comparison routes router.
pub fn compare_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(compare::show))
        .route("/add", post(compare::add))
        .route("/remove", post(compare::remove))
}

/// Create the tutorial routes router.
pub fn tutorial_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tutorials::index))
        .route("/{id}", get(tutorials::show))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::show))
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health))
        // Tool directory
        .nest("/tools", tool_routes())
        // Comparison
        .nest("/compare", compare_routes())
        // Tutorials
        .nest("/tutorials", tutorial_routes())
        // Tool submission
        .route("/submit", get(submit::form).post(submit::submit))
        // Contact
        .route("/contact", get(contact::form).post(contact::send))
        // Newsletter signup
        .route("/newsletter", post(newsletter::subscribe))
        // Admin
        .nest("/admin", admin_routes())
        // Styled 404 for everything else
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalog is compiled in, so
/// there are no dependencies to probe.
async fn health() -> &'static str {
    "ok"
}

/// Render the 404 page for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
