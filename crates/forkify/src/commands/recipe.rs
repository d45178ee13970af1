use anyhow::Result;
use tracing::info;

use crate::controller::App;

/// Show a recipe, optionally rescaled and with its bookmark toggled
pub async fn execute(
    app: &mut App,
    id: &str,
    servings: Option<u32>,
    toggle_bookmark: bool,
) -> Result<()> {
    info!(id, ?servings, toggle_bookmark, "Showing recipe");

    let mut html = app.show_recipe(id).await;
    if app.model().recipe().await.is_none() {
        println!("{}", html);
        anyhow::bail!("Could not load recipe {}", id);
    }

    if let Some(servings) = servings {
        html = app.update_servings(servings).await;
    }
    if toggle_bookmark {
        html = app.toggle_bookmark().await;
    }

    println!("{}", html);
    Ok(())
}
