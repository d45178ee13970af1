pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api/v2/recipes/";
pub const DEFAULT_PAGE_CAPACITY: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings the model needs to talk to the recipe API and paginate results
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Base recipes endpoint, ending in `/`
    pub api_url: String,
    pub api_key: String,
    /// Search results per page
    pub page_capacity: usize,
}

impl ModelConfig {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            page_capacity: DEFAULT_PAGE_CAPACITY,
        }
    }

    pub fn with_page_capacity(mut self, capacity: usize) -> Self {
        self.page_capacity = capacity.max(1);
        self
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, "")
    }
}
