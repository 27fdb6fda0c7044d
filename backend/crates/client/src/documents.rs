//! GraphQL documents sent by the client

pub const SIGNIN: &str = r#"mutation Signin($input: AuthInput!) {
  signin(input: $input) { id email createdAt token }
}"#;

pub const CREATE_USER: &str = r#"mutation CreateUser($input: AuthInput!) {
  createUser(input: $input) { id email createdAt token }
}"#;

pub const SIGNOUT: &str = r#"mutation Signout {
  signout
}"#;

pub const ME: &str = r#"query Me {
  user { id email createdAt }
}"#;

pub const ISSUES: &str = r#"query Issues {
  issues { id title content status userId createdAt }
}"#;

pub const ISSUES_FOR_USER: &str = r#"query IssuesForUser($email: String!) {
  issuesForUser(email: $email) { id title content status userId createdAt }
}"#;

pub const CREATE_ISSUE: &str = r#"mutation CreateIssue($input: CreateIssueInput!) {
  createIssue(input: $input) { id title content status userId createdAt }
}"#;

pub const UPDATE_ISSUE_STATUS: &str = r#"mutation UpdateIssueStatus($id: String!, $status: IssueStatus!) {
  updateIssueStatus(id: $id, status: $status) { id title content status userId createdAt }
}"#;

pub const DELETE_ISSUE: &str = r#"mutation DeleteIssue($id: ID!) {
  deleteIssue(id: $id) { id title content status userId createdAt }
}"#;
