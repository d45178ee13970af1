use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::config::ModelConfig;
use crate::error::{ModelError, ModelResult};
use crate::form::RecipeForm;
use crate::gateway::{self, RecipeGateway};
use crate::recipe::{
    recipe_from_response, search_results_from_response, Recipe, SearchResult, SearchSession,
};
use crate::state::{persist_bookmarks, AppState};
use crate::storage::KeyValueStore;

/// Model operations over one application state.
///
/// Gateway calls are the only suspension points and no state lock is held
/// across them. Two operations running concurrently can interleave there,
/// so state read before an `.await` may be stale afterwards; every commit
/// happens under a single write lock once the response is in.
pub struct Model {
    config: ModelConfig,
    gateway: Arc<dyn RecipeGateway>,
    store: Arc<dyn KeyValueStore>,
    state: Arc<RwLock<AppState>>,
}

impl Model {
    /// Create the model and hydrate bookmarks from `store`
    pub fn open(
        config: ModelConfig,
        gateway: Arc<dyn RecipeGateway>,
        store: Arc<dyn KeyValueStore>,
    ) -> ModelResult<Self> {
        let state = AppState::hydrate(store.as_ref())?;
        Ok(Self {
            config,
            gateway,
            store,
            state: Arc::new(RwLock::new(state)),
        })
    }

    pub async fn recipe(&self) -> Option<Recipe> {
        self.state.read().await.recipe.clone()
    }

    pub async fn search(&self) -> SearchSession {
        self.state.read().await.search.clone()
    }

    pub async fn bookmarks(&self) -> Vec<Recipe> {
        self.state.read().await.bookmarks.clone()
    }

    pub async fn is_bookmarked(&self, id: &str) -> bool {
        self.state.read().await.is_bookmarked(id)
    }

    /// Fetch recipe `id` and make it the current recipe.
    ///
    /// On failure the error is logged and returned; the current recipe is
    /// left as it was.
    pub async fn load_recipe(&self, id: &str) -> ModelResult<Recipe> {
        let mut recipe = match self.fetch_recipe(id).await {
            Ok(recipe) => recipe,
            Err(e) => {
                error!(id, error = %e, "Failed to load recipe");
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        recipe.bookmarked = state.is_bookmarked(id);
        state.recipe = Some(recipe.clone());
        info!(id, bookmarked = recipe.bookmarked, "Loaded recipe");

        Ok(recipe)
    }

    async fn fetch_recipe(&self, id: &str) -> ModelResult<Recipe> {
        let url = gateway::recipe_url(&self.config.api_url, id, &self.config.api_key)?;
        let body = self.gateway.fetch(&url, None).await?;
        recipe_from_response(&body)
    }

    /// Replace the search results with the matches for `query`.
    ///
    /// Failures are logged and swallowed: query, results and page keep their
    /// previous values. The page is not reset; callers pick the page to show.
    pub async fn load_search_results(&self, query: &str) {
        match self.fetch_search_results(query).await {
            Ok(results) => {
                let mut state = self.state.write().await;
                info!(query, count = results.len(), "Loaded search results");
                state.search.query = query.to_string();
                state.search.results = results;
            }
            Err(e) => {
                error!(query, error = %e, "Failed to load search results");
            }
        }
    }

    async fn fetch_search_results(&self, query: &str) -> ModelResult<Vec<SearchResult>> {
        let url = gateway::search_url(&self.config.api_url, query, &self.config.api_key)?;
        let body = self.gateway.fetch(&url, None).await?;
        search_results_from_response(&body)
    }

    /// Make `page` current and return its slice of the results.
    /// Pages past the end are empty; page 0 is treated as page 1.
    pub async fn get_search_results_page(&self, page: u32) -> Vec<SearchResult> {
        let page = page.max(1);
        let capacity = self.page_capacity();
        let mut state = self.state.write().await;
        state.search.page = page;

        let start = (page as usize - 1).saturating_mul(capacity);
        state
            .search
            .results
            .iter()
            .skip(start)
            .take(capacity)
            .cloned()
            .collect()
    }

    /// Number of result pages for the current search
    pub async fn page_count(&self) -> usize {
        let state = self.state.read().await;
        state.search.results.len().div_ceil(self.page_capacity())
    }

    fn page_capacity(&self) -> usize {
        self.config.page_capacity.max(1)
    }

    /// Append `recipe` to the bookmarks and persist them. Does not deduplicate.
    pub async fn add_bookmark(&self, recipe: Recipe) -> ModelResult<()> {
        let mut state = self.state.write().await;
        let mut bookmarks = state.bookmarks.clone();
        let id = recipe.id.clone();
        bookmarks.push(recipe);

        self.commit_bookmarks(&mut state, bookmarks)?;
        state.mark_current(&id, true);
        info!(id = %id, "Added bookmark");
        Ok(())
    }

    /// Remove the first bookmark with `id`, if any, and persist the rest
    pub async fn delete_bookmark(&self, id: &str) -> ModelResult<()> {
        let mut state = self.state.write().await;
        let mut bookmarks = state.bookmarks.clone();
        match bookmarks.iter().position(|b| b.id == id) {
            Some(index) => {
                bookmarks.remove(index);
            }
            None => debug!(id, "No bookmark to delete"),
        }

        self.commit_bookmarks(&mut state, bookmarks)?;
        state.mark_current(id, false);
        info!(id, "Deleted bookmark");
        Ok(())
    }

    /// Write-through: the in-memory collection only changes once the store accepted it
    fn commit_bookmarks(&self, state: &mut AppState, bookmarks: Vec<Recipe>) -> ModelResult<()> {
        persist_bookmarks(self.store.as_ref(), &bookmarks)?;
        state.bookmarks = bookmarks;
        Ok(())
    }

    /// Rescale the current recipe's ingredients to `new_servings`.
    ///
    /// The ratio uses the servings the recipe has right now, so repeated calls
    /// scale incrementally.
    pub async fn update_servings(&self, new_servings: u32) -> ModelResult<()> {
        if new_servings == 0 {
            return Err(ModelError::InvalidServings(new_servings));
        }

        let mut state = self.state.write().await;
        let recipe = state.recipe.as_mut().ok_or(ModelError::NoRecipeLoaded)?;
        let old_servings = recipe.servings;
        if old_servings == 0 {
            return Err(ModelError::InvalidServings(old_servings));
        }

        for ingredient in &mut recipe.ingredients {
            ingredient.scale(new_servings, old_servings);
        }
        recipe.servings = new_servings;
        debug!(old_servings, new_servings, "Updated servings");
        Ok(())
    }

    /// Upload a user recipe, make it current and bookmark it.
    ///
    /// Form validation happens before any request; nothing is committed
    /// unless the upload and the bookmark write both succeed.
    pub async fn add_recipe(&self, form: &RecipeForm) -> ModelResult<Recipe> {
        match self.upload_and_commit(form).await {
            Ok(recipe) => {
                info!(id = %recipe.id, "Uploaded recipe");
                Ok(recipe)
            }
            Err(e) => {
                error!(error = %e, "Failed to add recipe");
                Err(e)
            }
        }
    }

    async fn upload_and_commit(&self, form: &RecipeForm) -> ModelResult<Recipe> {
        let mut recipe = self.upload_recipe(form).await?;

        let mut state = self.state.write().await;
        recipe.bookmarked = true;
        let mut bookmarks = state.bookmarks.clone();
        bookmarks.push(recipe.clone());

        self.commit_bookmarks(&mut state, bookmarks)?;
        state.recipe = Some(recipe.clone());
        Ok(recipe)
    }

    async fn upload_recipe(&self, form: &RecipeForm) -> ModelResult<Recipe> {
        let upload = form.to_upload()?;
        let payload = serde_json::to_value(&upload)
            .map_err(|e| ModelError::Validation(format!("Unencodable recipe: {}", e)))?;

        let url = gateway::upload_url(&self.config.api_url, &self.config.api_key)?;
        let body = self.gateway.fetch(&url, Some(&payload)).await?;
        recipe_from_response(&body)
    }
}
