mod client;
mod types;

pub use client::BnetClient;
pub use types::{ContentBlock, TokenPayload};
