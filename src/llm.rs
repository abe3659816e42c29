use async_trait::async_trait;
use serde::Serialize;
use reqwest::Client;
use crate::error::{Result, AppError};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message { role: Role::User, content: content.into() }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

/// A chat-completion backend: role-tagged messages in, assistant text out.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, messages: &[Message], model: &str, temperature: f32) -> Result<String>;
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiCompleter {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompleter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        OpenAiCompleter {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Completer for OpenAiCompleter {
    async fn complete(&self, messages: &[Message], model: &str, temperature: f32) -> Result<String> {
        let body = ChatRequest { model, messages, temperature };

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError(format!("HTTP {}: {}", status, detail)));
        }

        let json: serde_json::Value = res.json().await?;
        extract_reply(&json)
    }
}

/// Pulls the assistant text out of a chat-completion reply.
/// A null or missing `content` on the first choice reads as empty text.
pub fn extract_reply(json: &serde_json::Value) -> Result<String> {
    let choice = json["choices"]
        .get(0)
        .ok_or_else(|| AppError::UpstreamError("Invalid response format from LLM: no choices".to_string()))?;

    Ok(choice["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_is_read_from_first_choice() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "• first" } },
                { "message": { "role": "assistant", "content": "• second" } }
            ]
        });
        assert_eq!(extract_reply(&body).unwrap(), "• first");
    }

    #[test]
    fn null_content_reads_as_empty() {
        let body = json!({ "choices": [ { "message": { "role": "assistant", "content": null } } ] });
        assert_eq!(extract_reply(&body).unwrap(), "");
    }

    #[test]
    fn missing_choices_is_upstream_error() {
        let body = json!({ "error": { "message": "rate limited" } });
        assert!(matches!(extract_reply(&body), Err(AppError::UpstreamError(_))));

        let empty = json!({ "choices": [] });
        assert!(matches!(extract_reply(&empty), Err(AppError::UpstreamError(_))));
    }

    #[test]
    fn request_body_uses_lowercase_roles() {
        let messages = [Message::system("be terse"), Message::user("hello")];
        let body = ChatRequest { model: "gpt-4o-mini", messages: &messages, temperature: 0.2 };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert!((value["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn endpoint_joins_base_url() {
        let completer = OpenAiCompleter::new("sk-test", "https://api.openai.com/v1");
        assert_eq!(completer.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
