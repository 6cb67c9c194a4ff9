//! Newsletter signup route handler.
//!
//! The signup form lives in the site footer and posts here from every page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use ai_tools_hub_core::Email;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::state::AppState;

/// Newsletter signup form data.
#[derive(Debug, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

/// Confirmation page for a successful signup.
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_success.html")]
pub struct NewsletterSuccessTemplate {
    pub email: String,
}

/// Error page for a rejected signup.
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_error.html")]
pub struct NewsletterErrorTemplate {
    pub message: String,
}

/// Handle a newsletter signup.
///
/// Addresses are normalized to trimmed lowercase before validation so the
/// same mailbox spelled differently reads as one subscriber.
#[instrument(skip(_state, form))]
pub async fn subscribe(
    State(_state): State<AppState>,
    Form(form): Form<NewsletterForm>,
) -> Response {
    let normalized = form.email.trim().to_lowercase();

    match Email::parse(&normalized) {
        Ok(email) => {
            tracing::info!(email = %email, "Newsletter signup");
            add_breadcrumb(
                "newsletter",
                "Newsletter signup",
                Some(&[("email", email.as_str())]),
            );
            NewsletterSuccessTemplate {
                email: email.as_str().to_string(),
            }
            .into_response()
        }
        Err(error) => {
            tracing::debug!(%error, "Newsletter signup rejected");
            NewsletterErrorTemplate {
                message: "Please enter a valid email address.".to_string(),
            }
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_accepts_mixed_case() {
        let normalized = "  Reader@Example.COM ".trim().to_lowercase();
        let email = Email::parse(&normalized).ok();
        assert_eq!(email.as_ref().map(Email::as_str), Some("reader@example.com"));
    }

    #[test]
    fn test_blank_email_rejected() {
        assert!(Email::parse("").is_err());
    }
}
