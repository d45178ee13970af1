use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Absent for "to taste" style ingredients
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

impl Ingredient {
    pub fn new(quantity: Option<f64>, unit: &str, description: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
            description: description.to_string(),
        }
    }

    /// Rescale quantity from `old` servings to `new` servings
    pub fn scale(&mut self, new_servings: u32, old_servings: u32) {
        if let Some(quantity) = self.quantity.as_mut() {
            *quantity = *quantity * f64::from(new_servings) / f64::from(old_servings);
        }
    }
}

/// Recipe as held in application state and persisted as a bookmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    /// Only present on user-submitted recipes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Derived from the bookmark collection on load, never persisted
    #[serde(skip)]
    pub bookmarked: bool,
}

/// Search hit; a subset of recipe fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Current search: query, results in server order, 1-indexed page
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub page: u32,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
        }
    }
}

/// Submission body sent when uploading a new recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeUpload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

/// API response structures
#[derive(Debug, Deserialize)]
struct ApiRecipe {
    id: String,
    title: String,
    publisher: String,
    source_url: String,
    image_url: String,
    servings: u32,
    cooking_time: u32,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchHit {
    id: String,
    title: String,
    publisher: String,
    image_url: String,
    #[serde(default)]
    key: Option<String>,
}

fn non_empty(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.is_empty())
}

/// Convert a `data.recipe` response body into a [`Recipe`] (not bookmarked)
pub fn recipe_from_response(body: &Value) -> ModelResult<Recipe> {
    let raw = body
        .pointer("/data/recipe")
        .ok_or_else(|| ModelError::MalformedResponse("missing data.recipe".into()))?;

    let api: ApiRecipe = serde_json::from_value(raw.clone())
        .map_err(|e| ModelError::MalformedResponse(format!("recipe: {}", e)))?;

    Ok(Recipe {
        id: api.id,
        title: api.title,
        publisher: api.publisher,
        source_url: api.source_url,
        image: api.image_url,
        servings: api.servings,
        cooking_time: api.cooking_time,
        ingredients: api.ingredients,
        key: non_empty(api.key),
        bookmarked: false,
    })
}

/// Convert a `data.recipes` response body into search results, keeping server order
pub fn search_results_from_response(body: &Value) -> ModelResult<Vec<SearchResult>> {
    let raw = body
        .pointer("/data/recipes")
        .ok_or_else(|| ModelError::MalformedResponse("missing data.recipes".into()))?;

    let hits: Vec<ApiSearchHit> = serde_json::from_value(raw.clone())
        .map_err(|e| ModelError::MalformedResponse(format!("search results: {}", e)))?;

    Ok(hits
        .into_iter()
        .map(|hit| SearchResult {
            id: hit.id,
            title: hit.title,
            publisher: hit.publisher,
            image: hit.image_url,
            key: non_empty(hit.key),
        })
        .collect())
}
