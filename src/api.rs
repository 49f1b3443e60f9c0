//! Thin clients for the two external services the site talks to: the n8n
//! chat webhook and the EmailJS send endpoint. Both are fire-and-await JSON
//! POSTs from the browser; neither owns any state.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compile-time webhook configuration, like the original deployment's env
/// injection. Leaving it unset keeps the chat widget in offline mode.
pub const N8N_WEBHOOK_URL: Option<&str> = option_env!("N8N_WEBHOOK_URL");

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const EMAILJS_SERVICE_ID: &str = "service_xuq7s3h";
const EMAILJS_TEMPLATE_ID: &str = "template_o41bvpk";
const EMAILJS_PUBLIC_KEY: &str = "sMxe6UVQQ9fu3NNNm";

pub fn is_chat_configured() -> bool {
    N8N_WEBHOOK_URL.is_some()
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("chat webhook is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(u16),
}

#[derive(Serialize)]
struct WebhookPayload<T: Serialize> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: T,
    timestamp: i64,
    source: &'static str,
}

impl<T: Serialize> WebhookPayload<T> {
    fn new(kind: &'static str, data: T) -> Self {
        Self {
            kind,
            data,
            timestamp: Utc::now().timestamp_millis(),
            source: "portfolio",
        }
    }
}

#[derive(Serialize)]
struct ChatData<'a> {
    message: &'a str,
    #[serde(rename = "conversationId")]
    conversation_id: &'static str,
    platform: &'static str,
}

#[derive(Deserialize)]
struct ChatReply {
    message: Option<String>,
    response: Option<String>,
}

/// Send a chat message to the n8n workflow and return the assistant's
/// reply. The workflow answers in either `message` or `response`.
pub async fn send_chat_message(message: &str) -> Result<String, ApiError> {
    let url = N8N_WEBHOOK_URL.ok_or(ApiError::NotConfigured)?;
    let payload = WebhookPayload::new(
        "chat_message",
        ChatData {
            message,
            conversation_id: "portfolio-chat",
            platform: "portfolio",
        },
    );

    let res = reqwest::Client::new()
        .post(url)
        .json(&payload)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(ApiError::Status(res.status().as_u16()));
    }

    let reply: ChatReply = res.json().await?;
    Ok(reply
        .message
        .or(reply.response)
        .unwrap_or_else(|| "Message received.".to_string()))
}

/// Contact-form fields, mapped 1:1 onto the EmailJS template variables.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: &'static str,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    service_id: &'static str,
    template_id: &'static str,
    user_id: &'static str,
    template_params: &'a ContactMessage,
}

pub async fn send_contact_email(message: &ContactMessage) -> Result<(), ApiError> {
    let req = EmailRequest {
        service_id: EMAILJS_SERVICE_ID,
        template_id: EMAILJS_TEMPLATE_ID,
        user_id: EMAILJS_PUBLIC_KEY,
        template_params: message,
    };

    let res = reqwest::Client::new()
        .post(EMAILJS_ENDPOINT)
        .json(&req)
        .send()
        .await?;
    if !res.status().is_success() {
        return Err(ApiError::Status(res.status().as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_payload_serializes_with_original_field_names() {
        let payload = WebhookPayload::new(
            "chat_message",
            ChatData {
                message: "hola",
                conversation_id: "portfolio-chat",
                platform: "portfolio",
            },
        );
        let value = serde_json::to_value(&payload).expect("serializable payload");
        assert_eq!(value["type"], "chat_message");
        assert_eq!(value["source"], "portfolio");
        assert_eq!(value["data"]["conversationId"], "portfolio-chat");
        assert_eq!(value["data"]["message"], "hola");
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn chat_reply_accepts_either_field() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"message":"hi"}"#).expect("message field parses");
        assert_eq!(reply.message.as_deref(), Some("hi"));
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"hey"}"#).expect("response field parses");
        assert_eq!(reply.response.as_deref(), Some("hey"));
    }

    #[test]
    fn email_request_carries_template_params() {
        let msg = ContactMessage {
            from_name: "Ada".into(),
            from_email: "ada@example.com".into(),
            phone: String::new(),
            message: "hello".into(),
            to_email: crate::content::EMAIL,
        };
        let req = EmailRequest {
            service_id: EMAILJS_SERVICE_ID,
            template_id: EMAILJS_TEMPLATE_ID,
            user_id: EMAILJS_PUBLIC_KEY,
            template_params: &msg,
        };
        let value = serde_json::to_value(&req).expect("serializable request");
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["to_email"], crate::content::EMAIL);
    }
}
