use async_trait::async_trait;

use crate::errors::ProviderError;

/// A generative-text provider able to turn a prompt into a short summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Whether the provider has the credentials it needs to be called
    fn is_configured(&self) -> bool;

    /// Sends the prompt to the provider and returns its text verbatim
    async fn summarize(&self, prompt: &str) -> Result<String, ProviderError>;
}
