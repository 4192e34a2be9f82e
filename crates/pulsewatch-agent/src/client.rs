//! Chat-completions client used as the social search capability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use pulsewatch_core::AppConfig;

use crate::error::AgentError;
use crate::extract::extract_posts;
use crate::types::RawPost;
use crate::Retriever;

/// Client for an OpenAI-compatible chat endpoint that performs the social
/// search. The model is asked for a JSON array of post records; whatever
/// comes back goes through [`extract_posts`].
pub struct SearchAgent {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl SearchAgent {
    /// Build a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.agent_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: format!(
                "{}/chat/completions",
                config.agent_base_url.trim_end_matches('/')
            ),
            api_key: config.agent_api_key.clone(),
            model: config.agent_model.clone(),
        })
    }

    /// Ask the model for the most recent posts about `query`.
    ///
    /// Content that cannot be interpreted as records degrades to an empty
    /// vec at the extraction layer; only transport/API-level problems
    /// surface as errors.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Http`] on transport failure,
    /// [`AgentError::Api`] on a non-success status, and
    /// [`AgentError::MalformedResponse`] when the response carries no
    /// message content.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawPost>, AgentError> {
        let prompt = format!(
            "Search social media for the most recent {max_results} posts related to '{query}'. \
             Include posts from Twitter, Telegram, and relevant RSS feeds. Return the results as \
             a JSON array of objects, each with 'platform', 'id', 'text', 'date', and 'url' \
             fields."
        );
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentError::Api(format!(
                "search endpoint returned status {}",
                response.status()
            )));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AgentError::MalformedResponse("response carried no message content".to_string())
            })?;

        let posts = extract_posts(&content);
        tracing::debug!(
            query,
            requested = max_results,
            extracted = posts.len(),
            "search round trip complete"
        );
        Ok(posts)
    }
}

impl Retriever for SearchAgent {
    fn retrieve(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl std::future::Future<Output = Result<Vec<RawPost>, AgentError>> + Send {
        self.search(query, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            agent_base_url: server.uri(),
            agent_api_key: "sk-test".to_string(),
            agent_model: "test-model".to_string(),
            agent_timeout_secs: 5,
            max_results: 10,
            interval_secs: 3600,
            topic_count: 3,
        }
    }

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn search_extracts_posts_from_json_content() {
        let server = MockServer::start().await;
        let content = r#"[{"platform": "twitter", "id": "1", "text": "Ceasefire holding", "date": "2024-05-01"}]"#;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(content)))
            .mount(&server)
            .await;

        let agent = SearchAgent::from_config(&config_for(&server)).expect("client builds");
        let posts = agent.search("ceasefire", 10).await.expect("search succeeds");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text.as_deref(), Some("Ceasefire holding"));
    }

    #[tokio::test]
    async fn search_degrades_to_empty_on_unusable_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_body("I was unable to find any posts.")),
            )
            .mount(&server)
            .await;

        let agent = SearchAgent::from_config(&config_for(&server)).expect("client builds");
        let posts = agent.search("ceasefire", 10).await.expect("search succeeds");
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn search_surfaces_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let agent = SearchAgent::from_config(&config_for(&server)).expect("client builds");
        let err = agent.search("ceasefire", 10).await.expect_err("should fail");
        assert!(matches!(err, AgentError::Api(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn search_rejects_contentless_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let agent = SearchAgent::from_config(&config_for(&server)).expect("client builds");
        let err = agent.search("ceasefire", 10).await.expect_err("should fail");
        assert!(matches!(err, AgentError::MalformedResponse(_)), "got: {err:?}");
    }
}
