use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Forkify Configuration

[api]
url = "https://forkify-api.herokuapp.com/api/v2/recipes/"
# Needed for uploads; FORKIFY_API_KEY is used when empty
key = ""
timeout_secs = 10

[search]
page_capacity = 10

[storage]
path = "~/.forkify/bookmarks.db"

[view]
icons = "img/icons.svg"
"#;

/// Initialize a new config file
pub fn run_init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config already exists at {:?}", path);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    println!("Created config at {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("forkify.toml");

        run_init(&path).unwrap();
        assert!(path.exists());
        assert!(run_init(&path).is_err());
    }
}
