//! 生成客户端模块：
//! - 调用 Anthropic Messages 接口，把指令文本换成 HTML
//! - 将传输、鉴权、响应格式问题映射为 `GenerationError`

use serde::{Deserialize, Serialize};

/// 默认模型标识
pub(crate) const DEFAULT_MODEL: &str = "claude-opus-4-20250514";
/// 默认接口地址
pub(crate) const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

const ANTHROPIC_VERSION: &str = "2023-06-01";
/// 单次生成的输出长度上限
const MAX_TOKENS: u32 = 8192;
/// 采样温度：取中等值，兼顾变化与连贯
const TEMPERATURE: f32 = 0.7;

/// 生成接口调用失败。调用方按致命错误处理，不做重试。
#[derive(Debug, thiserror::Error)]
pub(crate) enum GenerationError {
    #[error("请求发送失败: {0}")]
    Transport(String),
    #[error("接口返回错误状态 {status}: {message}")]
    Api { status: u16, message: String },
    #[error("解析接口响应失败: {0}")]
    Parse(#[from] std::io::Error),
    #[error("接口响应中没有文本内容")]
    EmptyContent,
}

/// Anthropic Messages 客户端
pub(crate) struct Client {
    api_key: String,
    model: String,
    api_url: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl Client {
    pub(crate) fn new(api_key: String, model: String, api_url: String) -> Self {
        Self { api_key, model, api_url }
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    /// 发送一次生成请求并返回响应中的首个文本内容块。
    /// 阻塞直到收到完整响应，失败不重试。
    pub(crate) fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![Message { role: "user", content: instruction }],
        };

        let resp = ureq::post(&self.api_url)
            .set("x-api-key", &self.api_key)
            .set("anthropic-version", ANTHROPIC_VERSION)
            .set("content-type", "application/json")
            .send_json(body);
        let resp = match resp {
            Ok(r) => r,
            Err(ureq::Error::Status(status, r)) => {
                let message = r.into_string().unwrap_or_default();
                return Err(GenerationError::Api { status, message });
            }
            Err(e) => return Err(GenerationError::Transport(e.to_string())),
        };

        let parsed: MessagesResponse = resp.into_json()?;
        parsed
            .content
            .into_iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text)
            .ok_or(GenerationError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_without_text_block_is_empty_content() {
        let parsed: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"tool_use"}]}"#).unwrap();
        let text = parsed
            .content
            .into_iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text);
        assert!(text.is_none());
    }

    #[test]
    fn first_text_block_wins() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"one"},{"type":"text","text":"two"}]}"#,
        )
        .unwrap();
        let text = parsed
            .content
            .into_iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text);
        assert_eq!(text.as_deref(), Some("one"));
    }

    #[test]
    fn request_body_shape_matches_messages_api() {
        let body = MessagesRequest {
            model: DEFAULT_MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![Message { role: "user", content: "hi" }],
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["model"], DEFAULT_MODEL);
        assert_eq!(v["max_tokens"], 8192);
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["messages"][0]["content"], "hi");
    }
}
