use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{assert_full_page, mock_book_list, mock_failure, sample_book, spawn_app};

#[tokio::test]
async fn homepage_shows_navbar() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains(r#"href="/for-you""#), "Login should link to /for-you");
    assert!(body.contains("Login"));
    for placeholder in ["About", "Contact", "Help"] {
        assert!(body.contains(placeholder), "navbar should show {placeholder}");
    }
    assert!(body.contains("<title>Summarist</title>"));
}

#[tokio::test]
async fn for_you_page_renders_all_sections() {
    let app = spawn_app().await;
    mock_book_list(
        &app.backend,
        "selected",
        sample_book("f9gy1gpai8", "How to Win Friends and Influence People"),
    )
    .await;
    mock_book_list(
        &app.backend,
        "recommended",
        json!([sample_book("5bxl50cz4bt", "Rich Dad Poor Dad")]),
    )
    .await;
    mock_book_list(
        &app.backend,
        "suggested",
        json!([sample_book("g80rtr4hz6", "Zero to One")]),
    )
    .await;

    let response = reqwest::get(app.page_url("/for-you"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("How to Win Friends and Influence People"));
    assert!(body.contains("Rich Dad Poor Dad"));
    assert!(body.contains("Zero to One"));
    assert!(body.contains(r#"href="/book/5bxl50cz4bt""#));
    assert!(body.contains("Recommended For You"));
    assert!(body.contains("Suggested Books"));
}

#[tokio::test]
async fn for_you_page_shows_error_fallback_when_backend_fails() {
    let app = spawn_app().await;
    mock_failure(&app.backend, "/getBooks", 500).await;

    let response = reqwest::get(app.page_url("/for-you"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("Oops! Something went wrong."));
    assert!(body.contains("Try Again"));
    assert!(body.contains(r#"data-reset-url="/for-you""#));
    assert!(!body.contains("Go Home"));
    assert!(
        !body.contains(r#"aria-label="Main navigation""#),
        "error fallback is rendered without the navbar"
    );
}

#[tokio::test]
async fn book_page_renders_details() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/getBook"))
        .and(query_param("id", "f9gy1gpai8"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_book("f9gy1gpai8", "How to Win Friends")),
        )
        .mount(&app.backend)
        .await;

    let response = reqwest::get(app.page_url("/book/f9gy1gpai8"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("How to Win Friends"));
    assert!(body.contains("Dale Carnegie"));
    assert!(body.contains("8 key ideas"));
    assert!(body.contains("Communication Skills"));
    assert!(body.contains("<audio"));
}

#[tokio::test]
async fn book_page_for_unknown_id_is_not_found() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/getBook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.backend)
        .await;

    let response = reqwest::get(app.page_url("/book/nope"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("This page does not exist."));
    assert!(body.contains("Go Home"));
}

#[tokio::test]
async fn book_page_retry_reloads_same_uri() {
    let app = spawn_app().await;
    mock_failure(&app.backend, "/getBook", 500).await;

    let response = reqwest::get(app.page_url("/book/abc"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"data-reset-url="/book/abc""#));
}

#[tokio::test]
async fn book_page_upstream_404_is_not_found() {
    let app = spawn_app().await;
    mock_failure(&app.backend, "/getBook", 404).await;

    let response = reqwest::get(app.page_url("/book/gone"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("This page does not exist."));
    assert!(body.contains("Go Home"));
    assert!(!body.contains("Try Again"));
}

#[tokio::test]
async fn search_page_retry_keeps_query_string() {
    let app = spawn_app().await;
    mock_failure(&app.backend, "/getBooksByAuthorOrTitle", 500).await;

    let response = reqwest::get(app.page_url("/search?search=habits"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"data-reset-url="/search?search=habits""#));
}

#[tokio::test]
async fn search_page_without_query_does_not_call_backend() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/search?search=%20%20"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains("Search Results"));

    let requests = app.backend.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "blank search should not hit the backend");
}

#[tokio::test]
async fn search_page_lists_matches() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/getBooksByAuthorOrTitle"))
        .and(query_param("search", "habits"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_book("2l0idxm1rvw", "Atomic Habits")])),
        )
        .mount(&app.backend)
        .await;

    let response = reqwest::get(app.page_url("/search?search=habits"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Search Results"));
    assert!(body.contains("Atomic Habits"));
}

#[tokio::test]
async fn search_page_with_no_matches_says_so() {
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/getBooksByAuthorOrTitle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.backend)
        .await;

    let response = reqwest::get(app.page_url("/search?search=zzz"))
        .await
        .expect("Failed to execute request");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No books matched"));
}

#[tokio::test]
async fn unknown_route_returns_not_found_page() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/does-not-exist"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("404"));
    assert!(body.contains("This page does not exist."));
    assert!(body.contains("Go Home"));
    assert!(body.contains(r#"href="/""#));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = spawn_app().await;

    let css = reqwest::get(app.page_url("/static/css/styles.css"))
        .await
        .expect("Failed to execute request");
    assert_eq!(css.status(), 200);
    assert_eq!(
        css.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );

    let logo = reqwest::get(app.page_url("/static/logo.svg"))
        .await
        .expect("Failed to execute request");
    assert_eq!(logo.status(), 200);
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/health"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request");

    let headers = response.headers();
    assert_eq!(
        headers.get("x-content-type-options").and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    assert!(headers.get("content-security-policy").is_some());
}
