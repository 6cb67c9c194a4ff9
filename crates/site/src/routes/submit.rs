//! Tool submission route handlers.
//!
//! Listings ship with the binary, so a submission is acknowledged and logged
//! for editorial review rather than written anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use ai_tools_hub_core::{Email, Pricing};

use crate::catalog::Catalog;
use crate::error::add_breadcrumb;
use crate::filters;
use crate::routes::tools::CategoryOptionView;
use crate::state::AppState;

/// Tool submission form data.
///
/// Also the template's view of the submitted values, so a failed validation
/// re-renders the form with everything the visitor typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub description: String,
}

/// Submission form page template.
#[derive(Template, WebTemplate)]
#[template(path = "submit/form.html")]
pub struct SubmitTemplate {
    pub categories: Vec<CategoryOptionView>,
    pub form: SubmitForm,
    pub error: Option<String>,
}

/// Submission acknowledgement page template.
#[derive(Template, WebTemplate)]
#[template(path = "submit/success.html")]
pub struct SubmitSuccessTemplate;

/// Display the submission form.
#[instrument(skip(state))]
pub async fn form(State(state): State<AppState>) -> impl IntoResponse {
    SubmitTemplate {
        categories: category_options(state.catalog()),
        form: SubmitForm::default(),
        error: None,
    }
}

/// Handle a submission.
///
/// Re-renders the form with an error message and the submitted values when
/// validation fails; otherwise shows the acknowledgement page.
#[instrument(skip(state, form), fields(tool = %form.tool_name))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Response {
    if let Err(message) = validate(&form, state.catalog()) {
        return SubmitTemplate {
            categories: category_options(state.catalog()),
            form,
            error: Some(message),
        }
        .into_response();
    }

    tracing::info!(
        company = %form.company_name.trim(),
        tool = %form.tool_name.trim(),
        category = %form.category,
        "Tool submission received"
    );
    add_breadcrumb(
        "submission",
        "Tool submitted for review",
        Some(&[("tool", form.tool_name.trim())]),
    );

    SubmitSuccessTemplate.into_response()
}

fn category_options(catalog: &Catalog) -> Vec<CategoryOptionView> {
    catalog.categories().iter().map(Into::into).collect()
}

/// Validate a submission, returning the first problem found.
fn validate(form: &SubmitForm, catalog: &Catalog) -> Result<(), String> {
    let all_filled = [
        &form.company_name,
        &form.tool_name,
        &form.email,
        &form.website,
        &form.category,
        &form.pricing,
        &form.description,
    ]
    .iter()
    .all(|field| !field.trim().is_empty());

    if !all_filled {
        return Err("Please fill in all fields.".to_string());
    }

    if Email::parse(form.email.trim()).is_err() {
        return Err("Please enter a valid email address.".to_string());
    }

    let website_ok = url::Url::parse(form.website.trim())
        .is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"));
    if !website_ok {
        return Err("Please enter a valid website URL, starting with https://.".to_string());
    }

    if catalog.category(form.category.trim()).is_none() {
        return Err("Please select a category.".to_string());
    }

    if form.pricing.trim().parse::<Pricing>().is_err() {
        return Err("Please select a pricing model.".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SubmitForm {
        SubmitForm {
            company_name: "Acme AI".to_string(),
            tool_name: "Acme Writer".to_string(),
            email: "hello@acme.ai".to_string(),
            website: "https://acme.ai".to_string(),
            category: "writing".to_string(),
            pricing: "freemium".to_string(),
            description: "Writes things with AI.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let catalog = Catalog::new();
        assert!(validate(&valid_form(), &catalog).is_ok());
    }

    #[test]
    fn test_blank_field_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            tool_name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, &catalog),
            Err("Please fill in all fields.".to_string())
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, &catalog),
            Err("Please enter a valid email address.".to_string())
        );
    }

    #[test]
    fn test_relative_website_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            website: "acme.ai/tool".to_string(),
            ..valid_form()
        };
        assert!(validate(&form, &catalog).is_err());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            website: "ftp://acme.ai".to_string(),
            ..valid_form()
        };
        assert!(validate(&form, &catalog).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            category: "robotics".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, &catalog),
            Err("Please select a category.".to_string())
        );
    }

    #[test]
    fn test_unknown_pricing_rejected() {
        let catalog = Catalog::new();
        let form = SubmitForm {
            pricing: "enterprise".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form, &catalog),
            Err("Please select a pricing model.".to_string())
        );
    }
}
