//! Admin dashboard route handlers.
//!
//! A single page serves both faces of `/admin`: signed-out visitors get the
//! login form, signed-in admins get the dashboard. There is no credential
//! store; any non-empty email and password sign in, and the session cookie
//! carries the admin marker until logout or expiry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{Catalog, Submission, Subscriber, Tool, Tutorial};
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub admin_email: String,
    pub total_tools: usize,
    pub total_tutorials: usize,
    pub pending_submissions: usize,
    pub total_subscribers: usize,
    pub tools: Vec<ToolRow>,
    pub tutorials: Vec<TutorialRow>,
    pub submissions: Vec<SubmissionRow>,
    pub subscribers: Vec<SubscriberRow>,
}

/// Tools table row.
pub struct ToolRow {
    pub name: String,
    pub category_name: String,
    pub pricing_label: &'static str,
    pub pricing_class: &'static str,
    pub rating: String,
}

impl ToolRow {
    fn new(tool: &Tool, catalog: &Catalog) -> Self {
        Self {
            name: tool.name.clone(),
            category_name: catalog.category_name(&tool.category).to_string(),
            pricing_label: tool.pricing.label(),
            pricing_class: tool.pricing.as_str(),
            rating: format!("{:.1}", tool.rating),
        }
    }
}

/// Tutorials table row.
pub struct TutorialRow {
    pub title: String,
    pub category: String,
    pub author: String,
    pub published: String,
}

impl From<&Tutorial> for TutorialRow {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            title: tutorial.title.clone(),
            category: tutorial.category.to_string(),
            author: tutorial.author.clone(),
            published: tutorial.published_at.to_string(),
        }
    }
}

/// Submissions table row.
pub struct SubmissionRow {
    pub company_name: String,
    pub tool_name: String,
    pub email: String,
    pub status: String,
}

impl From<&Submission> for SubmissionRow {
    fn from(submission: &Submission) -> Self {
        Self {
            company_name: submission.company_name.clone(),
            tool_name: submission.tool_name.clone(),
            email: submission.email.as_str().to_string(),
            status: submission.status.clone(),
        }
    }
}

/// Subscribers table row.
pub struct SubscriberRow {
    pub email: String,
    pub subscribed_on: String,
}

impl From<&Subscriber> for SubscriberRow {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            email: subscriber.email.as_str().to_string(),
            subscribed_on: subscriber.subscribed_at.to_string(),
        }
    }
}

/// Display the admin page: the dashboard when signed in, the login form
/// otherwise.
#[instrument(skip(state, admin))]
pub async fn show(State(state): State<AppState>, OptionalAdmin(admin): OptionalAdmin) -> Response {
    match admin {
        Some(admin) => dashboard(state.catalog(), admin.email).into_response(),
        None => AdminLoginTemplate { error: None }.into_response(),
    }
}

/// Handle a login attempt.
///
/// Both fields must be non-empty after trimming; beyond that, any credentials
/// are accepted.
#[instrument(skip(_state, session, form))]
pub async fn login(
    State(_state): State<AppState>,
    session: Session,
    Form(form): Form<AdminLoginForm>,
) -> Response {
    let email = form.email.trim();
    let password = form.password.trim();

    if email.is_empty() || password.is_empty() {
        return AdminLoginTemplate {
            error: Some("Please enter your email and password.".to_string()),
        }
        .into_response();
    }

    let admin = CurrentAdmin {
        email: email.to_string(),
    };
    if let Err(error) = set_current_admin(&session, &admin).await {
        tracing::error!(%error, "Failed to store admin session");
        return AdminLoginTemplate {
            error: Some("Something went wrong, please try again.".to_string()),
        }
        .into_response();
    }

    set_sentry_user(email);
    tracing::info!(email, "Admin signed in");

    Redirect::to("/admin").into_response()
}

/// Handle a logout.
#[instrument(skip(_state, session))]
pub async fn logout(State(_state): State<AppState>, session: Session) -> Redirect {
    if let Err(error) = clear_current_admin(&session).await {
        tracing::error!(%error, "Failed to clear admin session");
    }

    clear_sentry_user();
    tracing::info!("Admin signed out");

    Redirect::to("/admin")
}

fn dashboard(catalog: &Catalog, admin_email: String) -> AdminDashboardTemplate {
    AdminDashboardTemplate {
        admin_email,
        total_tools: catalog.tools().len(),
        total_tutorials: catalog.tutorials().len(),
        pending_submissions: catalog
            .submissions()
            .iter()
            .filter(|submission| submission.status == "pending")
            .count(),
        total_subscribers: catalog.subscribers().len(),
        tools: catalog
            .tools()
            .iter()
            .map(|tool| ToolRow::new(tool, catalog))
            .collect(),
        tutorials: catalog.tutorials().iter().map(Into::into).collect(),
        submissions: catalog.submissions().iter().map(Into::into).collect(),
        subscribers: catalog.subscribers().iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_counts_fixture_data() {
        let catalog = Catalog::new();
        let view = dashboard(&catalog, "admin@example.com".to_string());

        assert_eq!(view.total_tools, 8);
        assert_eq!(view.total_tutorials, 4);
        assert_eq!(view.pending_submissions, 2);
        assert_eq!(view.total_subscribers, 3);
        assert_eq!(view.tools.len(), 8);
        assert_eq!(view.subscribers.len(), 3);
    }

    #[test]
    fn test_tool_row_shows_display_values() {
        let catalog = Catalog::new();
        let tool = catalog.tool("chatgpt").unwrap();
        let row = ToolRow::new(tool, &catalog);

        assert_eq!(row.name, "ChatGPT");
        assert_eq!(row.category_name, "Chatbots");
        assert_eq!(row.pricing_label, "Freemium");
        assert_eq!(row.rating, "4.8");
    }

    #[test]
    fn test_submission_row_carries_status() {
        let catalog = Catalog::new();
        let row: SubmissionRow = catalog.submissions().first().unwrap().into();

        assert_eq!(row.company_name, "TechCorp");
        assert_eq!(row.tool_name, "AI Writer Pro");
        assert_eq!(row.status, "pending");
    }
}
