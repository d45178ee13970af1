mod cli;
mod commands;
mod config;
mod controller;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::{BookmarkCommands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    forkify_model::init_logging();

    // Parse CLI args
    let cli = Cli::parse();

    // Handle init command early (doesn't need config)
    if let Commands::Init { path } = &cli.command {
        return commands::init::run_init(path);
    }

    // Load config
    let config = config::load_config(cli.config.as_deref())?;
    let mut app = commands::build_app(&config)?;

    // Dispatch to command
    match cli.command {
        Commands::Init { .. } => {
            // Already handled above
            unreachable!()
        }
        Commands::Recipe {
            id,
            servings,
            bookmark,
        } => {
            commands::recipe::execute(&mut app, &id, servings, bookmark).await?;
        }
        Commands::Search { query, page } => {
            commands::search::execute(&mut app, &query, page).await?;
        }
        Commands::Bookmarks { action } => {
            let action = match action {
                BookmarkCommands::List => commands::bookmarks::BookmarkAction::List,
                BookmarkCommands::Remove { id } => commands::bookmarks::BookmarkAction::Remove(id),
            };
            commands::bookmarks::execute(&mut app, action).await?;
        }
        Commands::Upload { fields } => {
            commands::upload::execute(&mut app, fields).await?;
        }
        Commands::Shell => {
            commands::shell::execute(&mut app).await?;
        }
    }

    Ok(())
}
