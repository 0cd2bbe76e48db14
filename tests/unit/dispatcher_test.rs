//! Unit tests for the HipChat dispatcher
//!
//! Uses a spy transport to check request building, status classification
//! and failure logging.

use std::time::Duration;

use hipchat_notify::error::{AppError, TransportError};
use hipchat_notify::models::{
    ChatMessage, Color, DeliveryOutcome, NotificationConfig, NotificationPayload,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{spy_notifier, Reply, SpyTransport};

fn message() -> ChatMessage {
    ChatMessage::new(
        "[ERROR] <strong>web</strong> KeyError [<a href=\"https://x/\">view</a>]".to_string(),
        Color::Red,
        true,
    )
}

fn config() -> NotificationConfig {
    NotificationConfig::new("secret-token", "Ops Room")
}

// =============================================================================
// Status Classification
// =============================================================================

#[tokio::test]
async fn test_204_is_success_without_log() {
    let transport = SpyTransport::status(204);
    let (notifier, logger) = spy_notifier(transport.clone());

    let outcome = notifier.send(&message(), &config()).await.unwrap();

    assert_eq!(outcome, DeliveryOutcome::Success);
    assert_eq!(transport.calls(), 1);
    assert!(logger.lines().is_empty());
}

#[tokio::test]
async fn test_401_is_auth_rejected_with_one_log() {
    let transport = SpyTransport::status(401);
    let (notifier, logger) = spy_notifier(transport.clone());

    let outcome = notifier.send(&message(), &config()).await.unwrap();

    assert_eq!(outcome, DeliveryOutcome::AuthRejected);
    assert_eq!(
        logger.lines(),
        vec!["Security token not accepted for supplied room ID".to_string()]
    );
}

#[tokio::test]
async fn test_500_is_delivery_failed_with_one_log() {
    let transport = SpyTransport::status(500);
    let (notifier, logger) = spy_notifier(transport.clone());

    let outcome = notifier.send(&message(), &config()).await.unwrap();

    assert_eq!(outcome, DeliveryOutcome::DeliveryFailed(500));
    let lines = logger.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("could not be sent"));
    assert!(lines[0].contains("500"));
}

#[rstest]
#[case(200)]
#[case(400)]
#[case(403)]
#[case(404)]
#[case(429)]
#[case(503)]
#[tokio::test]
async fn test_other_statuses_are_terminal_failures(#[case] status: u16) {
    let transport = SpyTransport::status(status);
    let (notifier, logger) = spy_notifier(transport.clone());

    let outcome = notifier.send(&message(), &config()).await.unwrap();

    assert_eq!(outcome, DeliveryOutcome::DeliveryFailed(status));
    // No retries
    assert_eq!(transport.calls(), 1);
    assert_eq!(logger.lines().len(), 1);
}

// =============================================================================
// Gate
// =============================================================================

#[rstest]
#[case("", "Ops")]
#[case("secret-token", "")]
#[case("", "")]
#[tokio::test]
async fn test_unconfigured_sends_nothing(#[case] token: &str, #[case] room: &str) {
    let transport = SpyTransport::status(204);
    let (notifier, logger) = spy_notifier(transport.clone());

    let result = notifier
        .send(&message(), &NotificationConfig::new(token, room))
        .await;

    assert!(matches!(result, Err(AppError::NotConfigured)));
    assert_eq!(transport.calls(), 0);
    assert!(logger.lines().is_empty());
}

// =============================================================================
// Request Building
// =============================================================================

#[tokio::test]
async fn test_request_url_and_timeout() {
    let transport = SpyTransport::status(204);
    let (notifier, _) = spy_notifier(transport.clone());
    let config = config()
        .with_endpoint("https://chat.internal/v2/room/{room}/notification")
        .with_timeout(Duration::from_secs(7));

    notifier.send(&message(), &config).await.unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.url,
        "https://chat.internal/v2/room/Ops%20Room/notification?auth_token=secret-token"
    );
    assert_eq!(request.timeout, Duration::from_secs(7));
}

#[tokio::test]
async fn test_default_timeout_is_three_seconds() {
    let transport = SpyTransport::status(204);
    let (notifier, _) = spy_notifier(transport.clone());

    notifier.send(&message(), &config()).await.unwrap();

    assert_eq!(transport.last_request().timeout, Duration::from_secs(3));
    assert!(transport
        .last_request()
        .url
        .starts_with("https://api.hipchat.com/v2/room/Ops%20Room/notification?"));
}

#[tokio::test]
async fn test_body_round_trip() {
    let transport = SpyTransport::status(204);
    let (notifier, _) = spy_notifier(transport.clone());
    let message = message();

    notifier.send(&message, &config()).await.unwrap();

    let body = transport.last_request().body;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 4);

    let payload: NotificationPayload = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload.message, message.html_body());
    assert!(payload.notify);
    assert_eq!(payload.color, Color::Red);
    assert_eq!(payload.message_format, "html");
    assert_eq!(value["color"], "red");
}

#[tokio::test]
async fn test_non_ascii_body_is_utf8() {
    let transport = SpyTransport::status(204);
    let (notifier, _) = spy_notifier(transport.clone());
    let message = ChatMessage::new(
        "[INFO] déploiement terminé ✓".to_string(),
        Color::Green,
        false,
    );

    notifier.send(&message, &config()).await.unwrap();

    let body = String::from_utf8(transport.last_request().body).unwrap();
    assert!(body.contains("déploiement terminé ✓"));
}

// =============================================================================
// Transport Failures
// =============================================================================

#[tokio::test]
async fn test_timeout_propagates() {
    let transport = SpyTransport::new(Reply::Timeout);
    let (notifier, logger) = spy_notifier(transport.clone());

    let result = notifier.send(&message(), &config()).await;

    let err = result.unwrap_err();
    assert!(err.is_timeout());
    // The dispatcher does not log transport errors itself
    assert!(logger.lines().is_empty());
}

#[tokio::test]
async fn test_connection_refused_propagates() {
    let transport = SpyTransport::new(Reply::ConnectionRefused);
    let (notifier, _) = spy_notifier(transport.clone());

    let result = notifier.send(&message(), &config()).await;

    assert!(matches!(
        result,
        Err(AppError::Transport(TransportError::Connect(_)))
    ));
    assert_eq!(transport.calls(), 1);
}
