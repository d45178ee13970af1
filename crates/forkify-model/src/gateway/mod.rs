pub mod http;
pub mod provider;

pub use http::HttpGateway;
pub use provider::RecipeGateway;

use reqwest::Url;

use crate::error::{ModelError, ModelResult};

/// `{base}{id}?key={key}`, with `id` encoded as a single path segment
pub fn recipe_url(base: &str, id: &str, key: &str) -> ModelResult<String> {
    let mut url = parse_base(base)?;
    url.path_segments_mut()
        .map_err(|()| invalid_base(base, "cannot hold a path"))?
        .pop_if_empty()
        .push(id);
    url.query_pairs_mut().append_pair("key", key);
    Ok(url.into())
}

/// `{base}?search={query}&key={key}`
pub fn search_url(base: &str, query: &str, key: &str) -> ModelResult<String> {
    build_url(base, &[("search", query), ("key", key)])
}

/// `{base}?key={key}`, target of recipe submissions
pub fn upload_url(base: &str, key: &str) -> ModelResult<String> {
    build_url(base, &[("key", key)])
}

fn build_url(base: &str, params: &[(&str, &str)]) -> ModelResult<String> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| invalid_base(base, e))
}

fn parse_base(base: &str) -> ModelResult<Url> {
    Url::parse(base).map_err(|e| invalid_base(base, e))
}

fn invalid_base(base: &str, reason: impl std::fmt::Display) -> ModelError {
    ModelError::Gateway(format!("Invalid API url '{}': {}", base, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://forkify-api.example.com/api/v2/recipes/";

    #[test]
    fn test_recipe_url_appends_id_and_key() {
        let url = recipe_url(BASE, "abc123", "k-1").unwrap();
        assert_eq!(url, format!("{}abc123?key=k-1", BASE));
    }

    #[test]
    fn test_recipe_url_keeps_id_in_one_segment() {
        let url = recipe_url(BASE, "a#b", "k").unwrap();
        assert_eq!(url, format!("{}a%23b?key=k", BASE));

        let url = recipe_url(BASE, "abc?search=pizza", "k").unwrap();
        assert_eq!(url, format!("{}abc%3Fsearch=pizza?key=k", BASE));

        let url = recipe_url(BASE, "../../v1/x", "k").unwrap();
        assert_eq!(url, format!("{}..%2F..%2Fv1%2Fx?key=k", BASE));

        let without_slash = BASE.trim_end_matches('/');
        let url = recipe_url(without_slash, "abc", "k").unwrap();
        assert_eq!(url, format!("{}abc?key=k", BASE));
    }

    #[test]
    fn test_recipe_url_rejects_invalid_base() {
        let err = recipe_url("not a url", "abc", "k").unwrap_err();
        assert!(matches!(err, ModelError::Gateway(_)));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(BASE, "pizza", "k").unwrap();
        assert_eq!(url, format!("{}?search=pizza&key=k", BASE));

        let url = search_url(BASE, "mac & cheese", "k").unwrap();
        assert_eq!(url, format!("{}?search=mac+%26+cheese&key=k", BASE));
    }

    #[test]
    fn test_upload_url() {
        let url = upload_url(BASE, "k").unwrap();
        assert_eq!(url, format!("{}?key=k", BASE));
    }

    #[test]
    fn test_invalid_base_is_a_gateway_error() {
        let err = upload_url("not a url", "k").unwrap_err();
        assert!(matches!(err, ModelError::Gateway(_)));
    }
}
