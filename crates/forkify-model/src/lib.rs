pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod model;
pub mod recipe;
pub mod state;
pub mod storage;
pub mod view;

pub use config::ModelConfig;
pub use error::{ModelError, ModelResult};
pub use form::RecipeForm;
pub use gateway::{HttpGateway, RecipeGateway};
pub use model::Model;
pub use recipe::{Ingredient, Recipe, RecipeUpload, SearchResult, SearchSession};
pub use state::{AppState, BOOKMARK_KEY, UNREADABLE_BOOKMARK_KEY};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use view::{Container, Markup, View};

/// Initialize structured JSON logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
