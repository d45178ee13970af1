use anyhow::Result;

use crate::controller::App;

pub enum BookmarkAction {
    List,
    Remove(String),
}

pub async fn execute(app: &mut App, action: BookmarkAction) -> Result<()> {
    let html = match action {
        BookmarkAction::List => app.show_bookmarks().await,
        BookmarkAction::Remove(id) => app.remove_bookmark(&id).await,
    };
    println!("{}", html);
    Ok(())
}
