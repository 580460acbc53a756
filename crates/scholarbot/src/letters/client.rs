use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::generator::{CompletionClient, CompletionError, CompletionRequest};

/// HTTP client for the hosted completion endpoint. The wire shape is the
/// messages format the upstream proxy expects; one POST per request, no
/// retry, failures surface to the caller.
pub struct HttpCompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl HttpCompletionClient {
    pub fn new(endpoint: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let body = WireRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: request.system.as_deref(),
            messages: vec![WireMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let payload = response
            .json::<WireResponse>()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let text = payload
            .content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");
        if text.is_empty() {
            return Err(CompletionError::EmptyContent);
        }
        Ok(text)
    }
}
