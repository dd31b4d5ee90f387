use restock_engine::{Notifier, NotifyError, TelegramNotifier, TelegramSettings};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> TelegramSettings {
    TelegramSettings {
        bot_token: Some("123:abc".to_string()),
        chat_id: Some("42".to_string()),
        api_base: server.uri(),
        ..TelegramSettings::default()
    }
}

#[tokio::test]
async fn sends_markdown_payload_to_send_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(json!({
            "chat_id": "42",
            "text": "hello",
            "parse_mode": "Markdown",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings(&server)).unwrap();
    notifier.send("hello").await.expect("send ok");
}

#[tokio::test]
async fn api_rejection_surfaces_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "description": "Bad Request: chat not found",
        })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings(&server)).unwrap();
    let err = notifier.send("hello").await.unwrap_err();
    match err {
        NotifyError::Api {
            status,
            description,
        } => {
            assert_eq!(status, 400);
            assert_eq!(description, "Bad Request: chat not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn ok_false_with_http_200_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": false })))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::new(settings(&server)).unwrap();
    let err = notifier.send("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::Api { status: 200, .. }));
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    let notifier = TelegramNotifier::new(TelegramSettings::default()).unwrap();
    let err = notifier.send("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::MissingCredentials("bot token")));

    let notifier = TelegramNotifier::new(TelegramSettings {
        bot_token: Some("123:abc".to_string()),
        ..TelegramSettings::default()
    })
    .unwrap();
    let err = notifier.send("hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::MissingCredentials("chat id")));
}
