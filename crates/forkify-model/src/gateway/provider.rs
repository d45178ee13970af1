use async_trait::async_trait;
use serde_json::Value;

use crate::error::ModelResult;

/// Remote data gateway - abstraction over the recipe API transport
#[async_trait]
pub trait RecipeGateway: Send + Sync {
    /// GET `url`, or POST `payload` as JSON to `url` when one is given.
    /// Returns the parsed response body; non-success statuses are errors.
    async fn fetch(&self, url: &str, payload: Option<&Value>) -> ModelResult<Value>;
}
