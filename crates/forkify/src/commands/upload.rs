use anyhow::Result;
use forkify_model::RecipeForm;

use crate::controller::App;

pub async fn execute(app: &mut App, fields: Vec<(String, String)>) -> Result<()> {
    let form: RecipeForm = fields.into_iter().collect();
    let html = app.upload(&form).await;
    println!("{}", html);

    if app.model().recipe().await.is_none() {
        anyhow::bail!("Recipe upload failed");
    }
    Ok(())
}
