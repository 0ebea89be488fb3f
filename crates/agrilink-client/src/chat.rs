//! Assistant chat endpoint.

use crate::api::{ApiClient, ApiRequest};
use agrilink_core::Result;
use agrilink_core::chat::ChatReply;
use serde::Serialize;

#[derive(Serialize)]
struct ChatMessage<'a> {
    message: &'a str,
}

impl ApiClient {
    /// Sends one message to the assistant and returns its reply along
    /// with the intents it recognized.
    pub async fn send_chat(&self, message: &str) -> Result<ChatReply> {
        let request = ApiRequest::post("/chat").json(&ChatMessage { message })?;
        self.request_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_payload_carries_only_the_message() {
        let payload = serde_json::to_value(ChatMessage {
            message: "When should I sow wheat?",
        })
        .unwrap();

        assert_eq!(payload, json!({ "message": "When should I sow wheat?" }));
    }
}
