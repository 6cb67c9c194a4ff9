//! Admin session extractors.
//!
//! Provides extractors for reading the signed-in admin in route handlers.
//! The admin area lives on a single page that shows either the login form or
//! the dashboard, so an optional extractor covers both states.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that optionally gets the current signed-in admin.
///
/// Does not reject the request when nobody is signed in; handlers decide
/// whether to show the login form or the dashboard.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalAdmin(admin): OptionalAdmin,
/// ) -> impl IntoResponse {
///     match admin {
///         Some(a) => format!("Signed in as {}", a.email),
///         None => "Please sign in".to_string(),
///     }
/// }
/// ```
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let admin = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(admin))
    }
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (sign-out).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
