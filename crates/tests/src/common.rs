use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::put,
    Json, Router,
};
use serde_json::Value;
use shared_types::{AppError, MessageResponse, ResetPasswordRequest};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;
use validator::Validate;

/// Token the stub accepts once.
pub const VALID_TOKEN: &str = "valid-token";
/// Token containing characters that must be escaped in the path.
pub const SPACED_TOKEN: &str = "spaced token/with slash";
/// Token containing `&`, which arrives percent-encoded in the emailed link.
pub const AMPERSAND_TOKEN: &str = "abc&def";
/// Token that makes the stub fail without a JSON body.
pub const CRASH_TOKEN: &str = "crash";

pub const EXPIRED_MESSAGE: &str = "Reset link is invalid or has expired";
pub const STRONG_PASSWORD: &str = "Str0ng!pass";

/// One request as the stub backend saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub token: String,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    tokens: Arc<Mutex<HashSet<String>>>,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Password-reset backend on an ephemeral port, shaped like the real one:
/// single-use tokens, server-side validation, `AppError` bodies.
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = StubState::default();
        state
            .tokens
            .lock()
            .await
            .extend([VALID_TOKEN, SPACED_TOKEN, AMPERSAND_TOKEN].map(String::from));

        let app = Router::new()
            .route("/api/auth/password/reset/{token}", put(reset_password))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub backend stopped");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Every request received so far, oldest first.
    pub async fn received(&self) -> Vec<Received> {
        self.state.received.lock().await.clone()
    }
}

async fn reset_password(
    State(state): State<StubState>,
    Path(token): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.received.lock().await.push(Received {
        token: token.clone(),
        body: body.clone(),
    });

    if token == CRASH_TOKEN {
        return (StatusCode::BAD_GATEWAY, "upstream exploded").into_response();
    }

    let request: ResetPasswordRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => return AppError::bad_request(e.to_string()).into_response(),
    };
    if let Err(errors) = request.validate() {
        return AppError::from(errors).into_response();
    }

    if !state.tokens.lock().await.remove(&token) {
        return AppError::not_found(EXPIRED_MESSAGE).into_response();
    }

    Json(MessageResponse {
        message: "Password updated".to_string(),
    })
    .into_response()
}

/// Body the page must send for a given password pair.
pub fn expected_body(password: &str, confirm: &str) -> Value {
    serde_json::json!({ "password": password, "confirmPassword": confirm })
}

/// One-shot backend that answers with `status` and then hangs up partway
/// through the announced body. Returns its base URL.
pub async fn start_truncating_backend(status: u16) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind truncating backend");
    let addr = listener
        .local_addr()
        .expect("Truncating backend has no address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        // Drain the whole request (the JSON body ends the message) so closing
        // the socket sends FIN rather than RST.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"}") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let head = format!(
            "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{{\"message\":\"cut"
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/api")
}
