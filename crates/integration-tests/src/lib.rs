//! Integration tests for AI Tools Hub.
//!
//! Each test spawns the full site (router, sessions, middleware stack) on an
//! ephemeral loopback port and drives it over HTTP with `reqwest`. The catalog
//! is compiled in, so no database or external service is required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ai-tools-hub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `site_pages` - Page rendering and the 404 fallback
//! - `directory_filters` - Directory search, filter, and sort parameters
//! - `compare_session` - Session-backed comparison selection
//! - `forms` - Newsletter, submission, and contact form handling
//! - `admin_auth` - Admin login, dashboard, and logout

use ai_tools_hub_site::config::SiteConfig;
use ai_tools_hub_site::state::AppState;
use reqwest::Client;
use secrecy::SecretString;

/// A site instance listening on an ephemeral local port.
pub struct TestApp {
    base_url: String,
}

impl TestApp {
    /// Spawn the site in the background.
    ///
    /// Binds port 0 so parallel tests never collide; the server task is
    /// dropped with the runtime when the test ends.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let state = AppState::new(test_config());
        let app = ai_tools_hub_site::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Configuration for test instances; never reads the environment.
fn test_config() -> SiteConfig {
    SiteConfig {
        host: std::net::Ipv4Addr::LOCALHOST.into(),
        port: 0,
        base_url: "http://localhost".to_string(),
        session_secret: SecretString::from("0f8a2k39vLqX7mW1pR4tY6uZ8bN0cE2g"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// HTTP client with a cookie store and redirects disabled.
///
/// Cookies make session round-trips work; disabled redirects let tests
/// assert on the 303s the form handlers return.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
