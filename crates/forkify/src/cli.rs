use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum BookmarkCommands {
    /// List bookmarked recipes
    List,
    /// Remove a bookmark by recipe id
    Remove {
        /// Recipe id
        id: String,
    },
}

#[derive(Parser)]
#[command(name = "forkify")]
#[command(about = "Forkify - search recipes, scale servings, keep bookmarks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new config file
    Init {
        /// Path for new config file
        #[arg(default_value = "forkify.toml")]
        path: PathBuf,
    },
    /// Show a recipe
    Recipe {
        /// Recipe id
        id: String,
        /// Rescale ingredients to this many servings
        #[arg(long)]
        servings: Option<u32>,
        /// Toggle the recipe's bookmark
        #[arg(long)]
        bookmark: bool,
    },
    /// Search recipes
    Search {
        /// Search query, e.g. "pizza"
        query: String,
        /// Results page to show
        #[arg(long, default_value = "1")]
        page: u32,
    },
    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkCommands,
    },
    /// Upload a new recipe
    ///
    /// Fields: title, sourceUrl, image, publisher, cookingTime, servings, ingredient-N
    Upload {
        /// Form field as name=value; repeat for every field
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Interactive session keeping search and recipe state between commands
    Shell,
}

/// Parse `name=value`
fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}
