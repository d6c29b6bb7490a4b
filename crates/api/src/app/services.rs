use std::sync::Arc;

use anyhow::Context;

use fullstack_chat::{ChatProxy, EnvCredentials, OpenAiCompatibleClient};
use fullstack_items::ItemStore;

use crate::config::ApiConfig;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub items: Arc<ItemStore>,
    pub chat: ChatProxy,
}

impl AppServices {
    pub fn new(items: Arc<ItemStore>, chat: ChatProxy) -> Self {
        Self { items, chat }
    }
}

/// Production wiring: empty item store, env-backed credential, HTTP upstream.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let client = OpenAiCompatibleClient::new(&config.chat)
        .context("failed to build chat HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), "chat upstream configured");

    let chat = ChatProxy::new(
        Arc::new(EnvCredentials::new(config.api_key_var.clone())),
        Arc::new(client),
        config.chat.model.clone(),
    );

    Ok(AppServices::new(Arc::new(ItemStore::new()), chat))
}
