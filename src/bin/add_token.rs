use anyhow::{Context, Result};
use bnet_mock_agents::bnet::{BnetClient, ContentBlock, TokenPayload};
use clap::Parser;
use serde_json::{Map, Value, json};

#[derive(Parser)]
#[command(name = "add-token")]
#[command(about = "Helper to post a token to a bnet place")]
struct Cli {
    /// bnet address (host:port)
    bnet_addrs: String,

    /// bnet place id for insertion
    place_id: String,

    /// Token type; "robot" and "task" carry built-in content templates, any
    /// other value produces an empty content block keyed by the type
    #[arg(short, long)]
    token_type: String,

    /// Content entries merged into the block, formatted as key:value
    #[arg(short, long = "set", value_name = "KEY:VALUE")]
    set_content: Vec<String>,
}

fn template_block(token_type: &str) -> ContentBlock {
    match token_type {
        "robot" => ContentBlock {
            key: "robot".to_string(),
            content: json!({ "host": "localhost", "port": 8090 }),
        },
        "task" => ContentBlock {
            key: "task".to_string(),
            content: json!({ "task_id": "<task id>" }),
        },
        other => ContentBlock {
            key: other.to_string(),
            content: Value::Object(Map::new()),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut block = template_block(&cli.token_type);
    let content = block
        .content
        .as_object_mut()
        .context("content block is not an object")?;
    for pair in &cli.set_content {
        let (key, value) = pair
            .split_once(':')
            .with_context(|| format!("invalid --set entry (expected key:value): {pair}"))?;
        content.insert(key.to_string(), Value::String(value.to_string()));
    }

    let payload = TokenPayload {
        place_id: cli.place_id,
        content_blocks: vec![block],
    };

    println!("Request payload:");
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let base_url = if cli.bnet_addrs.starts_with("http://") || cli.bnet_addrs.starts_with("https://")
    {
        cli.bnet_addrs
    } else {
        format!("http://{}", cli.bnet_addrs)
    };

    println!("Posting to {}/add_token ...", base_url);
    BnetClient::with_base_url(base_url).add_token(&payload).await?;
    println!("done.");

    Ok(())
}
