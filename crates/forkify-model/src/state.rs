use tracing::{info, warn};

use crate::error::{ModelError, ModelResult};
use crate::recipe::{Recipe, SearchSession};
use crate::storage::KeyValueStore;

/// Key the bookmark collection is stored under
pub const BOOKMARK_KEY: &str = "bookmark";

/// Unreadable bookmark JSON is moved here before the collection starts over
pub const UNREADABLE_BOOKMARK_KEY: &str = "bookmark.unreadable";

/// Everything the client currently knows: loaded recipe, search, bookmarks
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub recipe: Option<Recipe>,
    pub search: SearchSession,
    pub bookmarks: Vec<Recipe>,
}

impl AppState {
    /// Empty state with bookmarks hydrated from `store`
    pub fn hydrate(store: &dyn KeyValueStore) -> ModelResult<Self> {
        Ok(Self {
            bookmarks: load_bookmarks(store)?,
            ..Self::default()
        })
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Set the current recipe's bookmark flag if it is the recipe `id`
    pub(crate) fn mark_current(&mut self, id: &str, bookmarked: bool) {
        if let Some(recipe) = self.recipe.as_mut().filter(|r| r.id == id) {
            recipe.bookmarked = bookmarked;
        }
    }
}

/// Read the persisted bookmark collection.
///
/// Unreadable JSON is copied to [`UNREADABLE_BOOKMARK_KEY`] and the
/// collection starts empty, so later writes cannot destroy it.
pub fn load_bookmarks(store: &dyn KeyValueStore) -> ModelResult<Vec<Recipe>> {
    let Some(raw) = store.get(BOOKMARK_KEY).map_err(ModelError::Storage)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Recipe>>(&raw) {
        Ok(bookmarks) => {
            info!(count = bookmarks.len(), "Loaded bookmarks");
            Ok(bookmarks)
        }
        Err(e) => {
            store
                .set(UNREADABLE_BOOKMARK_KEY, &raw)
                .map_err(ModelError::Storage)?;
            warn!(
                error = %e,
                backup = UNREADABLE_BOOKMARK_KEY,
                "Stored bookmarks are unreadable, starting empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Overwrite the persisted bookmark collection with `bookmarks`
pub fn persist_bookmarks(store: &dyn KeyValueStore, bookmarks: &[Recipe]) -> ModelResult<()> {
    let json = serde_json::to_string(bookmarks)
        .map_err(|e| ModelError::Storage(anyhow::Error::new(e)))?;
    store.set(BOOKMARK_KEY, &json).map_err(ModelError::Storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_hydrate_without_stored_bookmarks() {
        let store = MemoryStore::new();
        let state = AppState::hydrate(&store).unwrap();

        assert!(state.recipe.is_none());
        assert!(state.bookmarks.is_empty());
        assert_eq!(state.search.page, 1);
        assert!(state.search.query.is_empty());
    }

    #[test]
    fn test_hydrate_reads_bookmark_key() {
        let store = MemoryStore::new();
        store
            .set(
                BOOKMARK_KEY,
                r#"[{"id":"a","title":"A","publisher":"P","sourceUrl":"s","image":"i",
                    "servings":2,"cookingTime":10,"ingredients":[]}]"#,
            )
            .unwrap();

        let state = AppState::hydrate(&store).unwrap();
        assert_eq!(state.bookmarks.len(), 1);
        assert!(state.is_bookmarked("a"));
        assert!(!state.is_bookmarked("b"));
    }

    #[test]
    fn test_hydrate_ignores_corrupt_json() {
        let store = MemoryStore::new();
        store.set(BOOKMARK_KEY, "{not json").unwrap();

        let state = AppState::hydrate(&store).unwrap();
        assert!(state.bookmarks.is_empty());
    }

    #[test]
    fn test_unreadable_bookmarks_survive_next_write() {
        let store = MemoryStore::new();
        store.set(BOOKMARK_KEY, "{not json").unwrap();

        let state = AppState::hydrate(&store).unwrap();
        persist_bookmarks(&store, &state.bookmarks).unwrap();

        assert_eq!(store.get(BOOKMARK_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(
            store.get(UNREADABLE_BOOKMARK_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_readable_bookmarks_are_not_backed_up() {
        let store = MemoryStore::new();
        store.set(BOOKMARK_KEY, "[]").unwrap();

        AppState::hydrate(&store).unwrap();
        assert_eq!(store.get(UNREADABLE_BOOKMARK_KEY).unwrap(), None);
    }
}
