//! Assistant chat models.

use serde::{Deserialize, Serialize};

/// Assistant reply plus the intents it recognized in the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub intents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intents_default_to_empty() {
        let reply: ChatReply = serde_json::from_value(json!({"reply": "Hi!"})).unwrap();
        assert!(reply.intents.is_empty());
    }
}
