//! Integration tests for page rendering.
//!
//! Spawns the site in-process and checks that every public page renders with
//! the expected copy, and that unknown paths get the styled 404 page.

use ai_tools_hub_integration_tests::{TestApp, client};
use reqwest::StatusCode;

// ============================================================================
// Health & Home
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to get /health");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_home_page_sections() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    // Hero
    assert!(body.contains("Find the Perfect"));
    assert!(body.contains("AI Tool for You"));
    // Section headings
    assert!(body.contains("Explore by Category"));
    assert!(body.contains("Most Popular AI Tools"));
    assert!(body.contains("Featured AI Tools"));
    assert!(body.contains("Latest Tutorials"));
    // CTA
    assert!(body.contains("Submit Your Tool"));
    // Footer newsletter form
    assert!(body.contains("Stay Updated with AI Tools"));
}

#[tokio::test]
async fn test_home_page_links_categories() {
    let app = TestApp::spawn().await;

    let body = client()
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to get home page")
        .text()
        .await
        .expect("Failed to read body");

    // All eight fixture categories appear as tiles with their tool counts
    assert!(body.contains("/tools?category=writing"));
    assert!(body.contains("/tools?category=research"));
    assert!(body.contains("Image Generation"));
    assert!(body.contains("Chatbots"));
}

// ============================================================================
// Directory & Detail Pages
// ============================================================================

#[tokio::test]
async fn test_tools_index_lists_fixture_tools() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tools"))
        .send()
        .await
        .expect("Failed to get tools index");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("AI Tools Directory"));
    assert!(body.contains("Showing 8 tools"));
    assert!(body.contains("ChatGPT"));
    assert!(body.contains("Midjourney"));
}

#[tokio::test]
async fn test_tool_detail_page() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tools/chatgpt"))
        .send()
        .await
        .expect("Failed to get tool detail");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("About ChatGPT"));
    assert!(body.contains("Key Features"));
    assert!(body.contains("Pros"));
    assert!(body.contains("Cons"));
    assert!(body.contains("12,500 reviews"));
    assert!(body.contains("Visit ChatGPT"));
    // Sidebar shows other tools from the chat category first
    assert!(body.contains("Similar Tools"));
}

#[tokio::test]
async fn test_unknown_tool_is_404() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tools/does-not-exist"))
        .send()
        .await
        .expect("Failed to get unknown tool");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Page not found"));
    assert!(body.contains("/tools/does-not-exist"));
}

// ============================================================================
// Tutorials
// ============================================================================

#[tokio::test]
async fn test_tutorials_index() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tutorials"))
        .send()
        .await
        .expect("Failed to get tutorials index");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("AI Tutorials"));
    assert!(body.contains("Getting Started with ChatGPT"));
    assert!(body.contains("min read"));
}

#[tokio::test]
async fn test_tutorial_detail_renders_article() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tutorials/1"))
        .send()
        .await
        .expect("Failed to get tutorial detail");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("Getting Started with ChatGPT"));
    // The markdown body is rendered to HTML, not shown raw
    assert!(body.contains("<h2"));
    assert!(!body.contains("## "));
    assert!(body.contains("January 15, 2024"));
}

#[tokio::test]
async fn test_unknown_tutorial_is_404() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/tutorials/999"))
        .send()
        .await
        .expect("Failed to get unknown tutorial");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Fallback & Headers
// ============================================================================

#[tokio::test]
async fn test_unmatched_path_gets_styled_404() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/no/such/page"))
        .send()
        .await
        .expect("Failed to get unmatched path");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Page not found"));
    assert!(body.contains("/no/such/page"));
    // The 404 still carries the site chrome
    assert!(body.contains("AI Tools Hub"));
}

#[tokio::test]
async fn test_pages_carry_security_headers() {
    let app = TestApp::spawn().await;

    let resp = client()
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to get home page");

    let headers = resp.headers();
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert_eq!(
        headers.get("cache-control").unwrap(),
        "no-store, max-age=0"
    );
}

#[tokio::test]
async fn test_request_id_header_round_trip() {
    let app = TestApp::spawn().await;

    // A fresh ID is generated when none is supplied
    let resp = client()
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to get /health");
    assert!(resp.headers().contains_key("x-request-id"));

    // An upstream ID is echoed back
    let resp = client()
        .get(app.url("/health"))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .expect("Failed to get /health");
    assert_eq!(
        resp.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );
}
