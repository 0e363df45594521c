//! OpenAI-compatible chat completion client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{parse_brace_list, parse_comma_list, WordGenerator};
use crate::config::LlmConfig;
use crate::error::{BoardError, BoardResult};
use crate::models::CategoryKind;
use crate::pictograms::language::language_name;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn system(content: String) -> Self {
        Self {
            role: "system".to_string(),
            content,
        }
    }

    fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Token budget for a list of `words` items.
fn max_tokens_for(words: usize) -> u32 {
    (4.5 * words as f64 + 200.0).round() as u32
}

/// Word generator backed by `POST {endpoint}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiWordGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl OpenAiWordGenerator {
    /// Creates a generator from the `[llm]` config section.
    ///
    /// The API key is read from the configured environment variable. A
    /// missing key is reported when the first request is made.
    pub fn from_config(llm: &LlmConfig) -> BoardResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("coreboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BoardError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: llm.endpoint.trim_end_matches('/').to_string(),
            model: llm.model.clone(),
            api_key: llm.api_key(),
            temperature: llm.temperature,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    async fn complete(
        &self,
        label: &str,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> BoardResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            BoardError::upstream(label, "no API key configured for the word generator")
        })?;

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens,
        };

        debug!(model = %self.model, label, "requesting chat completion");
        let response: ChatResponse = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| BoardError::upstream(label, format!("request failed: {e}")))?
            .json()
            .await
            .map_err(|e| BoardError::upstream(label, format!("invalid response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| BoardError::upstream(label, "empty completion"))
    }
}

fn category_messages(topic: &str, category: CategoryKind, count: usize) -> Vec<ChatMessage> {
    let category = category.name().to_lowercase();
    vec![
        ChatMessage::system(format!(
            "You are a speech language pathologist selecting core vocabulary {category} \
             related to \"{topic}\". Provide exactly {count} common, versatile words that \
             could be used across multiple contexts."
        )),
        ChatMessage::user(format!(
            "Generate {count} core {category} for the topic \"{topic}\". \
             Return only the words in a comma-separated list."
        )),
    ]
}

fn suggestion_messages(topic: &str, max: usize, language: &str) -> Vec<ChatMessage> {
    let language = language_name(language);
    vec![
        ChatMessage::system(format!(
            "Act as a speech pathologist selecting pictograms in language {language} for a \
             non verbal person about what the user asks you to. Mandatory instructions:\n\
             - The list contains precisely {max} words.\n\
             - The words are related to the topic.\n\
             - Verbs use the infinitive form.\n\
             - Do not repeat any words.\n\
             - Do not include any text beyond the words requested.\n\
             - Use this exact format: {{word1, word2, ..., wordN}}."
        )),
        ChatMessage::user(format!("Create a board about {topic}")),
    ]
}

#[async_trait]
impl WordGenerator for OpenAiWordGenerator {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(
        &self,
        topic: &str,
        category: CategoryKind,
        count: usize,
    ) -> BoardResult<Vec<String>> {
        let label = category.name();
        let content = self
            .complete(
                label,
                category_messages(topic, category, count),
                max_tokens_for(count.max(50)),
            )
            .await?;

        let words = parse_comma_list(&content, count);
        if words.is_empty() {
            return Err(BoardError::upstream(label, "no words in completion"));
        }
        Ok(words)
    }

    async fn suggest(&self, topic: &str, max: usize, language: &str) -> BoardResult<Vec<String>> {
        let content = self
            .complete(
                "suggestions",
                suggestion_messages(topic, max, language),
                max_tokens_for(max),
            )
            .await?;

        let words = parse_brace_list(&content, max);
        if words.is_empty() {
            return Err(BoardError::upstream(
                "suggestions",
                "suggestion list is empty or the token limit was reached",
            ));
        }
        Ok(words)
    }
}
