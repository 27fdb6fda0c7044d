//! Authenticated queries and mutations

use std::sync::Arc;

use serde_json::json;

use crate::documents;
use crate::error::{ClientError, ClientResult};
use crate::graphql::{GraphqlRequest, GraphqlResponse, GraphqlTransport};
use crate::token_store::TokenStore;
use crate::types::{Issue, IssueStatus, NewIssue, User};

/// Sends the stored token with every request
pub struct IssueClient<T> {
    transport: T,
    tokens: Arc<dyn TokenStore>,
}

impl<T: GraphqlTransport + Sync> IssueClient<T> {
    pub fn new(transport: T, tokens: Arc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    async fn send(&self, request: GraphqlRequest) -> ClientResult<GraphqlResponse> {
        let token = self.tokens.get().ok_or(ClientError::NotSignedIn)?;
        self.transport.execute(&request, Some(&token)).await
    }

    pub async fn me(&self) -> ClientResult<User> {
        let request = GraphqlRequest::new(documents::ME, json!({})).named("Me");
        self.send(request).await?.decode("user")
    }

    pub async fn issues(&self) -> ClientResult<Vec<Issue>> {
        let request = GraphqlRequest::new(documents::ISSUES, json!({})).named("Issues");
        self.send(request).await?.decode("issues")
    }

    pub async fn issues_for_user(&self, email: &str) -> ClientResult<Vec<Issue>> {
        let request = GraphqlRequest::new(documents::ISSUES_FOR_USER, json!({ "email": email }))
            .named("IssuesForUser");
        self.send(request).await?.decode("issuesForUser")
    }

    pub async fn create_issue(&self, input: &NewIssue) -> ClientResult<Issue> {
        if !input.status.is_known() {
            return Err(ClientError::UnknownStatus);
        }
        let request = GraphqlRequest::new(documents::CREATE_ISSUE, json!({ "input": input }))
            .named("CreateIssue");
        self.send(request).await?.decode("createIssue")
    }

    pub async fn update_issue_status(&self, id: &str, status: IssueStatus) -> ClientResult<Issue> {
        if !status.is_known() {
            return Err(ClientError::UnknownStatus);
        }
        let request = GraphqlRequest::new(
            documents::UPDATE_ISSUE_STATUS,
            json!({ "id": id, "status": status }),
        )
        .named("UpdateIssueStatus");
        self.send(request).await?.decode("updateIssueStatus")
    }

    pub async fn delete_issue(&self, id: &str) -> ClientResult<Issue> {
        let request =
            GraphqlRequest::new(documents::DELETE_ISSUE, json!({ "id": id })).named("DeleteIssue");
        self.send(request).await?.decode("deleteIssue")
    }

    /// End the server session and forget the token
    ///
    /// The local token is cleared even if the server cannot be reached.
    pub async fn sign_out(&self) -> ClientResult<bool> {
        let request = GraphqlRequest::new(documents::SIGNOUT, json!({})).named("Signout");
        let result = match self.send(request).await {
            Ok(response) => response.decode("signout"),
            Err(ClientError::NotSignedIn) => Ok(false),
            Err(e) => Err(e),
        };
        self.tokens.clear();
        result
    }
}
