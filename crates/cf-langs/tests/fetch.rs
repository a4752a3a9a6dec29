//! End-to-end fetch tests against a mock submit page.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cf_langs::{ClientConfig, LangClient, LangError};

// ─────────────────────── helpers ───────────────────────

fn quiet_client() -> LangClient {
    LangClient::new(ClientConfig {
        announce: false,
        ..ClientConfig::default()
    })
    .unwrap()
}

async fn serve(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/problemset/submit"))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}

fn submit_url(server: &MockServer) -> String {
    format!("{}/problemset/submit", server.uri())
}

// ─────────────────────── tests ───────────────────────

#[tokio::test]
async fn test_single_rust_option() {
    let html = r#"<select name="programTypeId"><option value="49">Rust 1.31.1</option></select>"#;
    let server = serve(html, 200).await;

    let langs = quiet_client().get_lang_list(&submit_url(&server)).await.unwrap();
    assert_eq!(langs.len(), 1);
    assert_eq!(langs["49"], "Rust 1.31.1");
}

#[tokio::test]
async fn test_full_page_returns_every_option() {
    let html = r#"<!DOCTYPE html>
<html><body>
<form method="post" action="/problemset/submit?csrf_token=abc">
  <input type="hidden" name="action" value="submitSolutionFormSubmitted"/>
  <select name="programTypeId">
    <option value="43" >GNU GCC C11 5.1.0</option>
    <option value="54" selected="selected">GNU G++17 7.3.0</option>
    <option value="31" >Python 3.7.2</option>
    <option value="55" >Node.js 9.4.0</option>
  </select>
</form>
</body></html>"#;
    let server = serve(html, 200).await;

    let langs = quiet_client().get_lang_list(&submit_url(&server)).await.unwrap();
    assert_eq!(langs.len(), 4);
    assert_eq!(langs["54"], "GNU G++17 7.3.0");
    assert_eq!(langs["55"], "Node.js 9.4.0");
    assert!(!langs.contains_key("submitSolutionFormSubmitted"));

    let ordered = cf_langs::languages(&langs);
    assert_eq!(ordered[0].id, "31");
    assert_eq!(ordered[0].extension.as_deref(), Some("py"));
}

#[tokio::test]
async fn test_page_without_selector_is_error() {
    let html = "<html><body><p>Please log in</p></body></html>";
    let server = serve(html, 200).await;

    let err = quiet_client()
        .get_lang_list(&submit_url(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, LangError::BlockNotFound));
}

#[tokio::test]
async fn test_selector_without_options_is_error() {
    let html = r#"<select name="programTypeId"></select>"#;
    let server = serve(html, 200).await;

    let err = quiet_client()
        .get_lang_list(&submit_url(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, LangError::NoLanguages));
}

#[tokio::test]
async fn test_status_code_is_not_checked() {
    let html = r#"<select name="programTypeId"><option value="8">Ruby 2.0.0p645</option></select>"#;
    let server = serve(html, 404).await;

    let langs = quiet_client().get_lang_list(&submit_url(&server)).await.unwrap();
    assert_eq!(langs["8"], "Ruby 2.0.0p645");
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<select name="programTypeId"><option value="1">C</option></select>"#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = LangClient::new(ClientConfig {
        timeout: Some(Duration::from_millis(200)),
        announce: false,
        ..ClientConfig::default()
    })
    .unwrap();

    let err = client.get_lang_list(&server.uri()).await.unwrap_err();
    assert!(matches!(err, LangError::Http(_)));
}

#[tokio::test]
async fn test_free_function_uses_default_client() {
    let html = r#"<select name="programTypeId"><option value="32">Go 1.11.4</option></select>"#;
    let server = serve(html, 200).await;

    let langs = cf_langs::get_lang_list(&submit_url(&server)).await.unwrap();
    assert_eq!(langs["32"], "Go 1.11.4");
}
