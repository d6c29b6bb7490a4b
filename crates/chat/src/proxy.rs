use std::sync::Arc;

use crate::client::{CompletionClient, CompletionRequest};
use crate::credentials::CredentialProvider;
use crate::error::ChatError;
use crate::message::{build_messages, HistoryEntry};

/// Stateless translator from an inbound chat turn to one upstream call.
#[derive(Clone)]
pub struct ChatProxy {
    credentials: Arc<dyn CredentialProvider>,
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl ChatProxy {
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        client: Arc<dyn CompletionClient>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `history` plus `message` upstream and return the reply text verbatim.
    ///
    /// Fails with [`ChatError::Configuration`] before any network call when no
    /// credential is available.
    pub async fn chat(
        &self,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<String, ChatError> {
        let Some(api_key) = self.credentials.api_key() else {
            return Err(ChatError::configuration(format!(
                "{} is not set. Set it before retrying.",
                self.credentials.source()
            )));
        };

        let request = CompletionRequest::new(self.model.clone(), build_messages(history, message));
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            "dispatching chat completion"
        );

        self.client.complete(&api_key, &request).await
    }
}

impl core::fmt::Debug for ChatProxy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChatProxy")
            .field("credentials", &self.credentials.source())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
