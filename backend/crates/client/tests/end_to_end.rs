//! Drives a real server over HTTP with the client

use std::sync::Arc;

use auth::{AuthConfig, MemoryAuthRepository};
use client::{
    AuthFailure, AuthForm, AuthGateway, ClientError, FileTokenStore, FormPhase, HistoryNavigator,
    HttpTransport, IssueClient, IssueStatus, NewIssue, Route, TokenStore,
};
use issue::MemoryIssueRepository;
use schema::{build_schema, graphql_router};

const PASSWORD: &str = "MySecure#Pass2024";

/// Serve the schema on an ephemeral port and return its endpoint
async fn spawn_server() -> String {
    let schema = build_schema(
        MemoryAuthRepository::new(),
        MemoryIssueRepository::new(),
        AuthConfig::with_random_secret(),
    );
    let app = graphql_router(schema);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/graphql")
}

#[tokio::test]
async fn test_sign_up_manage_issues_sign_out() {
    let endpoint = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let tokens = Arc::new(FileTokenStore::open(dir.path().join("token")).unwrap());
    let navigator = Arc::new(HistoryNavigator::new());
    let transport = HttpTransport::new(&endpoint).unwrap();
    let gateway = AuthGateway::new(transport.clone(), tokens.clone(), navigator.clone());

    let mut signup = AuthForm::sign_up();
    signup.set_email("alice@example.com");
    signup.set_password(PASSWORD);
    let user = signup.submit(&gateway).await.unwrap().unwrap();
    assert_eq!(signup.phase(), &FormPhase::Succeeded);
    assert_eq!(tokens.get(), user.token);
    assert_eq!(navigator.history(), vec![Route::Home]);

    // A second registration with the same email fails without touching the token
    let mut again = AuthForm::sign_up();
    again.set_email("alice@example.com");
    again.set_password(PASSWORD);
    let result = again.submit(&gateway).await.unwrap();
    assert_eq!(result, Err(AuthFailure::EmailTaken));
    assert_eq!(tokens.get(), user.token);

    let issues = IssueClient::new(transport.clone(), tokens.clone());
    assert_eq!(issues.me().await.unwrap().id, user.id);

    let created = issues
        .create_issue(&NewIssue {
            title: "Login page broken".to_string(),
            content: "Steps to reproduce".to_string(),
            status: IssueStatus::Todo,
        })
        .await
        .unwrap();
    assert_eq!(created.user_id, user.id);

    let done = issues
        .update_issue_status(&created.id, IssueStatus::Done)
        .await
        .unwrap();
    assert_eq!(done.status, IssueStatus::Done);
    assert_eq!(done.title, created.title);

    let mine = issues.issues_for_user("alice@example.com").await.unwrap();
    assert_eq!(mine.len(), 1);

    let removed = issues.delete_issue(&created.id).await.unwrap();
    assert_eq!(removed.id, created.id);
    let err = issues.delete_issue(&created.id).await.unwrap_err();
    assert_eq!(err.reason(), Some("ISSUE_NOT_FOUND"));
    assert!(issues.issues().await.unwrap().is_empty());

    // The token outlives the client objects until sign-out
    let reopened = FileTokenStore::open(dir.path().join("token")).unwrap();
    assert_eq!(reopened.get(), user.token);

    assert!(issues.sign_out().await.unwrap());
    assert!(tokens.get().is_none());
    assert!(matches!(issues.me().await, Err(ClientError::NotSignedIn)));
}

#[tokio::test]
async fn test_sign_in_with_wrong_password() {
    let endpoint = spawn_server().await;
    let tokens = Arc::new(client::MemoryTokenStore::new());
    let navigator = Arc::new(HistoryNavigator::new());
    let gateway = AuthGateway::new(
        HttpTransport::new(&endpoint).unwrap(),
        tokens.clone(),
        navigator.clone(),
    );

    let mut signup = AuthForm::sign_up();
    signup.set_email("bob@example.com");
    signup.set_password(PASSWORD);
    signup.submit(&gateway).await.unwrap().unwrap();
    tokens.clear();

    let mut signin = AuthForm::sign_in();
    signin.set_email("bob@example.com");
    signin.set_password("secret");
    let result = signin.submit(&gateway).await.unwrap();

    assert_eq!(result, Err(AuthFailure::InvalidCredentials));
    assert_eq!(signin.email(), "bob@example.com");
    assert!(tokens.get().is_none());
    assert_eq!(navigator.history(), vec![Route::Home]);

    signin.set_password(PASSWORD);
    signin.submit(&gateway).await.unwrap().unwrap();
    assert!(tokens.get().is_some());
    assert_eq!(navigator.history(), vec![Route::Home, Route::Home]);
}

#[tokio::test]
async fn test_unreachable_server() {
    let tokens = Arc::new(client::MemoryTokenStore::new());
    let gateway = AuthGateway::new(
        HttpTransport::new("http://127.0.0.1:9/graphql").unwrap(),
        tokens.clone(),
        Arc::new(HistoryNavigator::new()),
    );

    let mut form = AuthForm::sign_in();
    let result = form.submit(&gateway).await.unwrap();
    assert!(matches!(result, Err(AuthFailure::Transport(_))));
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_unusable_authorization_header_does_not_block_sign_up() {
    let endpoint = spawn_server().await;
    let http = reqwest::Client::new();

    for (i, header) in ["", "Bearer ", "Basic dXNlcjpwYXNz"].into_iter().enumerate() {
        let body = serde_json::json!({
            "query": client::documents::CREATE_USER,
            "variables": {
                "input": { "email": format!("stray{i}@example.com"), "password": PASSWORD }
            },
        });
        let response = http
            .post(&endpoint)
            .header(reqwest::header::AUTHORIZATION, header)
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK, "header {header:?}");

        let payload: serde_json::Value = response.json().await.unwrap();
        let token = payload["data"]["createUser"]["token"].as_str().unwrap_or_default();
        assert!(!token.is_empty(), "header {header:?}: {payload}");
    }
}

#[tokio::test]
async fn test_unusable_authorization_header_is_not_a_session() {
    let endpoint = spawn_server().await;
    let payload: serde_json::Value = reqwest::Client::new()
        .post(&endpoint)
        .header(reqwest::header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .json(&serde_json::json!({ "query": "{ user { id } }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(payload["data"].is_null());
    assert_eq!(
        payload["errors"][0]["extensions"]["reason"],
        serde_json::json!("NOT_AUTHENTICATED")
    );
}
