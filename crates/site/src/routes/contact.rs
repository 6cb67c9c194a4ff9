//! Contact form route handlers.

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

/// Contact form data, echoed back into the template on validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/form.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub error: Option<String>,
}

/// Contact acknowledgement page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/success.html")]
pub struct ContactSentTemplate;

/// Display the contact page.
#[instrument(skip(_state))]
pub async fn form(State(_state): State<AppState>) -> impl IntoResponse {
    ContactTemplate {
        form: ContactForm::default(),
        error: None,
    }
}

/// Handle a contact message.
#[instrument(skip(_state, form), fields(subject = %form.subject))]
pub async fn send(State(_state): State<AppState>, Form(form): Form<ContactForm>) -> Response {
    if let Err(message) = validate(&form) {
        return ContactTemplate {
            form,
            error: Some(message),
        }
        .into_response();
    }

    tracing::info!(
        name = %form.name.trim(),
        subject = %form.subject.trim(),
        "Contact message received"
    );
    add_breadcrumb(
        "contact",
        "Contact message sent",
        Some(&[("subject", form.subject.trim())]),
    );

    ContactSentTemplate.into_response()
}

fn validate(form: &ContactForm) -> Result<(), String> {
    let all_filled = [&form.name, &form.email, &form.subject, &form.message]
        .iter()
        .all(|field| !field.trim().is_empty());

    if !all_filled {
        return Err("Please fill in all fields.".to_string());
    }

    if Email::parse(form.email.trim()).is_err() {
        return Err("Please enter a valid email address.".to_string());
    }

    Ok(())
}
