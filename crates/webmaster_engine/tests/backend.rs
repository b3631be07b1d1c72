use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use webmaster_engine::{Backend, BackendSettings, FailureKind, ReqwestBackend};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    ReqwestBackend::new(BackendSettings::new(server.uri())).expect("backend")
}

#[tokio::test]
async fn scrape_posts_url_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "http://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Website scraped and indexed successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server)
        .scrape("http://example.com")
        .await
        .expect("scrape ok");
}

#[tokio::test]
async fn scrape_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    backend_for(&server)
        .scrape("http://example.com")
        .await
        .expect("any 2xx is success");
}

#[tokio::test]
async fn scrape_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Error scraping website" })),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .scrape("http://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn ask_returns_answer_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "question": "What is this page about?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "It's about examples.",
            "sources": []
        })))
        .mount(&server)
        .await;

    let answer = backend_for(&server)
        .ask("What is this page about?")
        .await
        .expect("ask ok");
    assert_eq!(answer, "It's about examples.");
}

#[tokio::test]
async fn ask_without_answer_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "nope" })))
        .mount(&server)
        .await;

    let err = backend_for(&server).ask("Q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn ask_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = backend_for(&server).ask("Q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "yes" })))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        ReqwestBackend::new(BackendSettings::new(format!("{}/api", server.uri()))).unwrap();
    assert_eq!(backend.ask("Q").await.unwrap(), "yes");
}

#[tokio::test]
async fn cookies_are_sent_back_on_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).insert_header("Set-Cookie", "session=abc; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "with cookie" })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    backend.scrape("http://example.com").await.unwrap();
    assert_eq!(backend.ask("Q").await.unwrap(), "with cookie");
}

#[tokio::test]
async fn configured_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "answer": "late" })),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..BackendSettings::new(server.uri())
    };
    let err = ReqwestBackend::new(settings).unwrap().ask("Q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on the discard port.
    let err = ReqwestBackend::new(BackendSettings::new("http://127.0.0.1:9"))
        .unwrap()
        .scrape("http://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
