//! End-to-end tests for the signup flow against a mock HTTP server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{HttpClientConfig, SignupError};
use domain::SignupRequest;
use signup_form::{
    BearerToken, HttpSignupClient, PageView, Phase, SignupApi, SubmissionController,
};

const TOKEN: &str = "test-token";
const VALID_PASSWORD: &str = "Abcdefgh12";
const REJECTION: &str = "Sorry, the entered password is not allowed, please try a different one.";

// =============================================================================
// Helpers
// =============================================================================

fn http_config(server_uri: &str) -> HttpClientConfig {
    HttpClientConfig {
        endpoint: format!("{}/signup", server_uri),
        ..HttpClientConfig::default()
    }
}

fn controller_for(config: &HttpClientConfig) -> SubmissionController {
    let api = Arc::new(HttpSignupClient::new(config).unwrap());
    let token = Arc::new(BearerToken::new(TOKEN).unwrap());
    let mut controller = SubmissionController::new(api, token);
    controller.set_username("alice");
    controller.set_password(VALID_PASSWORD);
    controller
}

async fn server_responding(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

// =============================================================================
// HTTP Client
// =============================================================================

#[tokio::test]
async fn test_client_sends_json_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "username": "alice", "password": VALID_PASSWORD })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpSignupClient::new(&http_config(&server.uri())).unwrap();
    let request = SignupRequest::from_form("alice", VALID_PASSWORD).unwrap();
    let token = BearerToken::new(TOKEN).unwrap();

    let response = tokio_test::assert_ok!(client.create_user(&token, &request).await);
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_client_returns_error_statuses_as_responses() {
    let server =
        server_responding(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
            .await;

    let client = HttpSignupClient::new(&http_config(&server.uri())).unwrap();
    let request = SignupRequest::from_form("alice", VALID_PASSWORD).unwrap();
    let token = BearerToken::new(TOKEN).unwrap();

    let response = client.create_user(&token, &request).await.unwrap();
    assert_eq!(response.status, 500);
    assert!(response.body.contains("boom"));
}

// =============================================================================
// Controller + HTTP
// =============================================================================

#[tokio::test]
async fn test_created_on_200() {
    let server = server_responding(ResponseTemplate::new(200)).await;
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let mut controller = controller_for(&http_config(&server.uri())).on_created(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let phase = controller.submit().await;

    assert_eq!(phase, Phase::Succeeded);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        PageView::render(controller.state(), &phase).to_string(),
        "User was successfully created!\n"
    );
}

#[tokio::test]
async fn test_forbidden_is_not_authenticated() {
    let server = server_responding(ResponseTemplate::new(403)).await;
    let mut controller = controller_for(&http_config(&server.uri()));

    let phase = controller.submit().await;

    assert_eq!(phase, Phase::Failed(SignupError::Unauthorized));
    assert_eq!(
        controller.state().alert(),
        Some("Not authenticated to access this resource.")
    );
    assert!(phase.is_editable());
}

#[tokio::test]
async fn test_server_rejected_password() {
    let server =
        server_responding(ResponseTemplate::new(500).set_body_json(json!({ "message": REJECTION })))
            .await;
    let mut controller = controller_for(&http_config(&server.uri()));

    let phase = controller.submit().await;

    assert_eq!(phase, Phase::Failed(SignupError::PasswordRejected));
    assert!(controller.state().password_invalid());
    assert_eq!(controller.state().api_error_message(), Some(REJECTION));
}

#[tokio::test]
async fn test_malformed_500_body_is_generic() {
    let server =
        server_responding(ResponseTemplate::new(500).set_body_string("<html>oops</html>")).await;
    let mut controller = controller_for(&http_config(&server.uri()));

    controller.submit().await;

    assert_eq!(
        controller.state().alert(),
        Some("Something went wrong, please try again.")
    );
}

#[tokio::test]
async fn test_connection_refused_is_generic() {
    // Nothing listens on port 1
    let mut controller = controller_for(&http_config("http://127.0.0.1:1"));

    let phase = controller.submit().await;

    assert!(matches!(phase, Phase::Failed(SignupError::Network(_))));
    assert!(!controller.state().is_submitting);
    assert_eq!(
        controller.state().alert(),
        Some("Something went wrong, please try again.")
    );
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server =
        server_responding(ResponseTemplate::new(200).set_delay(Duration::from_secs(3))).await;
    let config = HttpClientConfig {
        request_timeout_secs: Some(1),
        ..http_config(&server.uri())
    };
    let mut controller = controller_for(&config);

    let phase = controller.submit().await;

    assert!(matches!(phase, Phase::Failed(SignupError::Network(_))));
    assert!(!controller.state().is_submitting);
}

#[tokio::test]
async fn test_busy_while_in_flight() {
    let server =
        server_responding(ResponseTemplate::new(200).set_delay(Duration::from_millis(200))).await;
    let mut controller = controller_for(&http_config(&server.uri()));
    let mut updates = controller.subscribe();
    assert!(!updates.borrow().is_submitting);

    let (phase, seen_busy) = tokio::join!(controller.submit(), async move {
        updates.wait_for(|state| state.is_submitting).await.is_ok()
    });

    assert_eq!(phase, Phase::Succeeded);
    assert!(seen_busy);
    assert!(!controller.state().is_submitting);
}

#[tokio::test]
async fn test_cancelled_submit_clears_busy_flag() {
    let server =
        server_responding(ResponseTemplate::new(200).set_delay(Duration::from_secs(5))).await;
    let mut controller = controller_for(&http_config(&server.uri()));

    let result = tokio::time::timeout(Duration::from_millis(200), controller.submit()).await;

    assert!(result.is_err());
    assert!(!controller.state().is_submitting);
    assert_eq!(controller.phase(), &Phase::Idle);
    assert!(!controller.subscribe().borrow().is_submitting);
}

#[tokio::test]
async fn test_local_failures_never_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&http_config(&server.uri()));
    controller.set_username("");
    assert_eq!(
        controller.submit().await,
        Phase::Failed(SignupError::UsernameRequired)
    );

    controller.set_username("alice");
    controller.set_password("no digits here");
    assert!(matches!(
        controller.submit().await,
        Phase::Failed(SignupError::PasswordRules(_))
    ));
}
