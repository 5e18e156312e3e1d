use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Token inserted into a bnet place via `/add_token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub place_id: String,
    pub content_blocks: Vec<ContentBlock>,
}

/// One keyed block of token content. The content shape is free-form; bnet
/// stores it opaquely and hands it back to actions that address the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub key: String,
    pub content: Value,
}

impl TokenPayload {
    /// Subscription token announcing an agent's network address, keyed by
    /// the agent id.
    pub fn agent_subscription(place_id: &str, agent_id: &str, host: &str, port: u16) -> Self {
        Self {
            place_id: place_id.to_string(),
            content_blocks: vec![ContentBlock {
                key: agent_id.to_string(),
                content: json!({ "host": host, "port": port }),
            }],
        }
    }
}
