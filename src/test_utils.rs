//! Test helpers: an in-memory chat service and a ready-made config.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::vendor::message::{Completion, Message};
use crate::vendor::ChatCompletion;

pub type Call = (String, Vec<Message>);

/// Answers every request the same way and remembers what it was sent.
pub struct RecordingClient {
    reply: std::result::Result<Completion, String>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingClient {
    pub fn replying(completion: Completion) -> Arc<Self> {
        Arc::new(RecordingClient {
            reply: Ok(completion),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(RecordingClient {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ChatCompletion for RecordingClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<Completion> {
        self.calls
            .lock()
            .await
            .push((model.to_string(), messages.to_vec()));
        self.reply.clone().map_err(|message| anyhow!(message))
    }
}

pub fn test_config(upload_dir: &Path) -> Config {
    Config {
        api_key: "test-key".into(),
        shape_username: "tenshi".into(),
        base_url: "http://127.0.0.1:9/v1".into(),
        timeout: Duration::from_secs(1),
        port: 0,
        upload_dir: upload_dir.to_path_buf(),
    }
}
