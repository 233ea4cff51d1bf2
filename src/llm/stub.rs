//! Canned provider for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use crate::llm::client::LlmProvider;

pub(crate) struct StubProvider {
    reply: std::result::Result<String, String>,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(anyhow::Error::msg)
    }
}
