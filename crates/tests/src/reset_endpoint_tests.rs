use client::{ApiError, HttpResetApi, PasswordResetApi, Token};
use pretty_assertions::assert_eq;
use shared_types::{MessageResponse, ResetPasswordRequest, GENERIC_FAILURE_MESSAGE};

use crate::common::{self, StubBackend};

fn token(raw: &str) -> Token {
    Token::new(raw).unwrap()
}

fn strong_request() -> ResetPasswordRequest {
    ResetPasswordRequest::new(common::STRONG_PASSWORD, common::STRONG_PASSWORD)
}

#[tokio::test]
async fn test_reset_success_sends_put_with_exact_body() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(&backend.base_url);

    let response = api
        .reset_password(&token(common::VALID_TOKEN), &strong_request())
        .await
        .unwrap();
    assert_eq!(response.message, "Password updated");

    let received = backend.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].token, common::VALID_TOKEN);
    assert_eq!(
        received[0].body,
        common::expected_body(common::STRONG_PASSWORD, common::STRONG_PASSWORD)
    );
}

#[tokio::test]
async fn test_reset_token_is_escaped_in_path() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(format!("{}/", backend.base_url));

    let result = api
        .reset_password(&token(common::SPACED_TOKEN), &strong_request())
        .await;
    assert!(result.is_ok(), "{result:?}");

    let received = backend.received().await;
    assert_eq!(received[0].token, common::SPACED_TOKEN);
}

#[tokio::test]
async fn test_reset_unknown_token_surfaces_server_message() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(&backend.base_url);

    let err = api
        .reset_password(&token("not-a-real-token"), &strong_request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 404,
            message: Some(common::EXPIRED_MESSAGE.to_string()),
        }
    );
    assert_eq!(err.user_message(), common::EXPIRED_MESSAGE);
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(&backend.base_url);
    let valid = token(common::VALID_TOKEN);

    assert!(api.reset_password(&valid, &strong_request()).await.is_ok());
    let err = api
        .reset_password(&valid, &strong_request())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), common::EXPIRED_MESSAGE);
}

#[tokio::test]
async fn test_reset_server_side_validation_message() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(&backend.base_url);
    let weak = ResetPasswordRequest::new("weakpassword", "weakpassword");

    let err = api
        .reset_password(&token(common::VALID_TOKEN), &weak)
        .await
        .unwrap_err();

    match &err {
        ApiError::Rejected { status, message } => {
            assert_eq!(*status, 422);
            assert!(message
                .as_deref()
                .unwrap()
                .starts_with("Password does not meet all requirements"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reset_non_json_failure_uses_fallback() {
    let backend = StubBackend::start().await;
    let api = HttpResetApi::new(&backend.base_url);

    let err = api
        .reset_password(&token(common::CRASH_TOKEN), &strong_request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 502,
            message: None,
        }
    );
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_reset_truncated_error_body_uses_fallback() {
    let base_url = common::start_truncating_backend(500).await;
    let api = HttpResetApi::new(base_url);

    let err = api
        .reset_password(&token(common::VALID_TOKEN), &strong_request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            message: None,
        }
    );
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_reset_truncated_success_body_still_succeeds() {
    let base_url = common::start_truncating_backend(200).await;
    let api = HttpResetApi::new(base_url);

    let response = api
        .reset_password(&token(common::VALID_TOKEN), &strong_request())
        .await
        .unwrap();

    assert_eq!(response, MessageResponse::default());
}

#[tokio::test]
async fn test_reset_unreachable_backend_is_transport_error() {
    // Bind then drop a listener to get a port nobody is serving.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpResetApi::new(format!("http://{addr}/api"));
    let err = api
        .reset_password(&token(common::VALID_TOKEN), &strong_request())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    // The endpoint URL carries the token; it must not leak into the error.
    assert!(!err.to_string().contains(common::VALID_TOKEN));
}
