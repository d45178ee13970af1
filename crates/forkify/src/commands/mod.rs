pub mod bookmarks;
pub mod init;
pub mod recipe;
pub mod search;
pub mod shell;
pub mod upload;

use anyhow::{Context, Result};
use forkify_model::{HttpGateway, Model, RedbStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{Config, API_KEY_ENV};
use crate::controller::App;

/// Build the app from config: HTTP gateway, redb bookmark store, views
pub fn build_app(config: &Config) -> Result<App> {
    let model_config = config.model_config();
    if model_config.api_key.is_empty() {
        warn!(
            "No API key configured (set api.key or {}); uploads will be rejected",
            API_KEY_ENV
        );
    }

    let gateway = HttpGateway::new(Duration::from_secs(config.api.timeout_secs))?;

    let storage_path = config.storage_path();
    if let Some(parent) = storage_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create storage dir: {:?}", parent))?;
    }
    let store = RedbStore::open(&storage_path)?;
    info!(path = ?storage_path, "Opened bookmark store");

    let model = Model::open(model_config, Arc::new(gateway), Arc::new(store))?;
    Ok(App::new(model, &config.view.icons))
}
