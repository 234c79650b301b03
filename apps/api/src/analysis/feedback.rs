//! Feedback generation — the inference seam of the analysis pipeline.
//!
//! `AppState` holds an `Arc<dyn FeedbackGenerator>`; production uses `LlmClient`.

use async_trait::async_trait;

use crate::llm_client::LlmClient;
use crate::llm_client::LlmError;

/// Turns a prompt into free-text feedback.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl FeedbackGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate_text(prompt).await
    }
}
