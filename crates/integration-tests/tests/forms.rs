//! Integration tests for the newsletter, submission, and contact forms.
//!
//! Validation failures re-render with an error message and the submitted
//! values; successes land on an acknowledgement page. Nothing is persisted,
//! so every assertion is on the rendered response.

use ai_tools_hub_integration_tests::{TestApp, client};
use reqwest::StatusCode;

// ============================================================================
// Newsletter
// ============================================================================

#[tokio::test]
async fn test_newsletter_signup_normalizes_email() {
    let app = TestApp::spawn().await;

    let resp = client()
        .post(app.url("/newsletter"))
        .form(&[("email", "  Reader@Example.COM ")])
        .send()
        .await
        .expect("Failed to post /newsletter");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Subscribed!"));
    assert!(body.contains("reader@example.com"));
}

#[tokio::test]
async fn test_newsletter_rejects_invalid_email() {
    let app = TestApp::spawn().await;

    let resp = client()
        .post(app.url("/newsletter"))
        .form(&[("email", "not-an-email")])
        .send()
        .await
        .expect("Failed to post /newsletter");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Subscription failed"));
    assert!(body.contains("Please enter a valid email address."));
}

// ============================================================================
// Tool Submission
// ============================================================================

fn valid_submission() -> Vec<(&'static str, &'static str)> {
    vec![
        ("company_name", "Acme AI"),
        ("tool_name", "Acme Writer"),
        ("email", "hello@acme.ai"),
        ("website", "https://acme.ai"),
        ("category", "writing"),
        ("pricing", "freemium"),
        ("description", "Writes things with AI."),
    ]
}

fn submission_with(field: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    valid_submission()
        .into_iter()
        .map(|(name, v)| if name == field { (name, value) } else { (name, v) })
        .collect()
}

#[tokio::test]
async fn test_submit_form_offers_all_categories() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/submit"))
        .send()
        .await
        .expect("Failed to get /submit");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Submit Your"));
    assert!(body.contains(r#"<option value="writing">"#));
    assert!(body.contains(r#"<option value="research">"#));
    assert!(body.contains("Submit Tool for Review"));
}

#[tokio::test]
async fn test_valid_submission_is_acknowledged() {
    let app = TestApp::spawn().await;

    let resp = client()
        .post(app.url("/submit"))
        .form(&valid_submission())
        .send()
        .await
        .expect("Failed to post /submit");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Thank You!"));
    assert!(body.contains("2-3 business days"));
}

#[tokio::test]
async fn test_blank_field_rerenders_with_typed_values() {
    let app = TestApp::spawn().await;

    let resp = client()
        .post(app.url("/submit"))
        .form(&submission_with("tool_name", "   "))
        .send()
        .await
        .expect("Failed to post /submit");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Please fill in all fields."));
    // The other fields keep what the visitor typed
    assert!(body.contains(r#"value="Acme AI""#));
    assert!(body.contains(r#"value="hello@acme.ai""#));
}

#[tokio::test]
async fn test_submission_validation_messages() {
    let app = TestApp::spawn().await;

    let cases = [
        (
            submission_with("email", "not-an-email"),
            "Please enter a valid email address.",
        ),
        (
            submission_with("website", "acme.ai"),
            "Please enter a valid website URL, starting with https://.",
        ),
        (
            submission_with("website", "ftp://acme.ai"),
            "Please enter a valid website URL, starting with https://.",
        ),
        (
            submission_with("category", "robotics"),
            "Please select a category.",
        ),
        (
            submission_with("pricing", "enterprise"),
            "Please select a pricing model.",
        ),
    ];

    for (form, expected) in cases {
        let resp = client()
            .post(app.url("/submit"))
            .form(&form)
            .send()
            .await
            .expect("Failed to post /submit");

        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.expect("Failed to read body");
        assert!(body.contains(expected), "expected message: {expected}");
    }
}

// ============================================================================
// Contact
// ============================================================================

#[tokio::test]
async fn test_contact_page_renders() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/contact"))
        .send()
        .await
        .expect("Failed to get /contact");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Get in Touch"));
    assert!(body.contains("hello@aitoolshub.com"));
    assert!(body.contains("Send Message"));
}

#[tokio::test]
async fn test_valid_contact_message_is_acknowledged() {
    let app = TestApp::spawn().await;

    let resp = client()
        .post(app.url("/contact"))
        .form(&[
            ("name", "Dana"),
            ("email", "dana@example.com"),
            ("subject", "Listing correction"),
            ("message", "The ChatGPT listing is missing a feature."),
        ])
        .send()
        .await
        .expect("Failed to post /contact");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("24-48 hours"));
}

#[tokio::test]
async fn test_contact_validation() {
    let app = TestApp::spawn().await;

    // Missing message
    let resp = client()
        .post(app.url("/contact"))
        .form(&[
            ("name", "Dana"),
            ("email", "dana@example.com"),
            ("subject", "Hello"),
            ("message", ""),
        ])
        .send()
        .await
        .expect("Failed to post /contact");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Please fill in all fields."));

    // Invalid email, typed values preserved
    let resp = client()
        .post(app.url("/contact"))
        .form(&[
            ("name", "Dana"),
            ("email", "dana"),
            ("subject", "Hello"),
            ("message", "A question about listings."),
        ])
        .send()
        .await
        .expect("Failed to post /contact");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains(r#"value="Dana""#));
}
