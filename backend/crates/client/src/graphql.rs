//! GraphQL-over-HTTP transport

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'static str>,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: &'static str, variables: Value) -> Self {
        Self {
            query,
            operation_name: None,
            variables,
        }
    }

    pub fn named(mut self, operation_name: &'static str) -> Self {
        self.operation_name = Some(operation_name);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorExtensions {
    pub code: Option<String>,
    pub reason: Option<String>,
    pub action: Option<String>,
}

impl GraphqlResponse {
    /// `data.<field>`, which is `Value::Null` when absent
    pub fn field(&self, name: &str) -> &Value {
        self.data
            .as_ref()
            .and_then(|data| data.get(name))
            .unwrap_or(&Value::Null)
    }

    /// The first error, converted
    pub fn first_error(&self) -> Option<ClientError> {
        self.errors.first().map(|entry| {
            let extensions = entry.extensions.clone().unwrap_or_default();
            ClientError::Graphql {
                message: entry.message.clone(),
                code: extensions.code,
                reason: extensions.reason,
            }
        })
    }

    /// Decode a non-null `data.<field>`, or surface the first error
    pub fn decode<T: serde::de::DeserializeOwned>(&self, name: &'static str) -> ClientResult<T> {
        let value = self.field(name);
        if value.is_null() {
            return Err(self
                .first_error()
                .unwrap_or(ClientError::MissingField(name)));
        }
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Sends one GraphQL request; `bearer` becomes `Authorization: Bearer <token>`
#[trait_variant::make(GraphqlTransport: Send)]
pub trait LocalGraphqlTransport {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        bearer: Option<&str>,
    ) -> ClientResult<GraphqlResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("issue-tracker-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl GraphqlTransport for HttpTransport {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        bearer: Option<&str>,
    ) -> ClientResult<GraphqlResponse> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = bearer {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            builder = builder.header(AUTHORIZATION, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.json::<GraphqlResponse>().await?;
        tracing::debug!(
            operation = request.operation_name.unwrap_or("<anonymous>"),
            errors = body.errors.len(),
            "GraphQL response received"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = GraphqlRequest::new("query { user { id } }", json!({})).named("Me");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "query { user { id } }", "operationName": "Me", "variables": {} })
        );
    }

    #[test]
    fn test_decode_null_field_surfaces_error() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": { "signin": null },
            "errors": [{
                "message": "Invalid email or password",
                "extensions": { "code": "UNAUTHORIZED", "reason": "INVALID_CREDENTIALS" }
            }]
        }))
        .unwrap();

        let err = response.decode::<Value>("signin").unwrap_err();
        assert_eq!(err.reason(), Some("INVALID_CREDENTIALS"));
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_decode_missing_without_errors() {
        let response: GraphqlResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(matches!(
            response.decode::<Value>("user"),
            Err(ClientError::MissingField("user"))
        ));
    }
}
