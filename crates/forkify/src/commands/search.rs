use anyhow::Result;
use tracing::info;

use crate::controller::App;

pub async fn execute(app: &mut App, query: &str, page: u32) -> Result<()> {
    info!(query, page, "Searching recipes");

    let mut html = app.search(query).await;
    if page != 1 {
        html = app.go_to_page(page).await;
    }

    println!("{}", html);
    Ok(())
}
