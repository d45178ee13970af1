use forkify_model::{Container, Model, RecipeForm, View};
use tracing::info;

use crate::views::{
    BookmarksMarkup, Pagination, PaginationMarkup, RecipeMarkup, ResultsMarkup, SearchMarkup,
};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Recipe was successfully uploaded :)";

/// Wires user actions to model operations and re-renders the affected views.
/// Every action returns the HTML of the views it touched.
pub struct App {
    model: Model,
    search_view: View<SearchMarkup>,
    recipe_view: View<RecipeMarkup>,
    results_view: View<ResultsMarkup>,
    pagination_view: View<PaginationMarkup>,
    bookmarks_view: View<BookmarksMarkup>,
}

impl App {
    pub fn new(model: Model, icons: &str) -> Self {
        Self {
            model,
            search_view: View::new(SearchMarkup, Container::new(".search"), icons),
            recipe_view: View::new(RecipeMarkup, Container::new(".recipe"), icons),
            results_view: View::new(
                ResultsMarkup { active: None },
                Container::new(".results"),
                icons,
            ),
            pagination_view: View::new(PaginationMarkup, Container::new(".pagination"), icons),
            bookmarks_view: View::new(
                BookmarksMarkup { active: None },
                Container::new(".bookmarks__list"),
                icons,
            ),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub async fn show_recipe(&mut self, id: &str) -> String {
        self.recipe_view.render_spinner();
        self.results_view.markup_mut().active = Some(id.to_string());
        self.bookmarks_view.markup_mut().active = Some(id.to_string());

        match self.model.load_recipe(id).await {
            Ok(recipe) => self.recipe_view.render(Some(recipe)),
            Err(_) => self.recipe_view.render_error(None),
        }
        self.recipe_view.html().to_string()
    }

    /// Run a search typed into the search bar and show its first page
    pub async fn search(&mut self, input: &str) -> String {
        self.search_view.container_mut().set_search_field(input);
        let query = self.search_view.get_query();
        let query = query.trim();
        if query.is_empty() {
            self.search_view.render_error(None);
            return self.search_view.html().to_string();
        }

        self.results_view.render_spinner();
        self.model.load_search_results(query).await;
        self.go_to_page(1).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> String {
        let results = self.model.get_search_results_page(page).await;
        self.results_view.render(Some(results));

        let pagination = Pagination {
            page: self.model.search().await.page,
            pages: self.model.page_count().await,
        };
        self.pagination_view.render(Some(pagination));

        join(&[self.results_view.html(), self.pagination_view.html()])
    }

    pub async fn update_servings(&mut self, servings: u32) -> String {
        match self.model.update_servings(servings).await {
            Ok(()) => {
                let recipe = self.model.recipe().await;
                self.recipe_view.render(recipe);
            }
            Err(e) => self.recipe_view.render_error(Some(&e.to_string())),
        }
        self.recipe_view.html().to_string()
    }

    /// Bookmark the current recipe, or remove its bookmark if it has one
    pub async fn toggle_bookmark(&mut self) -> String {
        let Some(recipe) = self.model.recipe().await else {
            self.recipe_view.render_error(None);
            return self.recipe_view.html().to_string();
        };

        let result = if recipe.bookmarked {
            self.model.delete_bookmark(&recipe.id).await
        } else {
            self.model.add_bookmark(recipe).await
        };
        if let Err(e) = result {
            self.bookmarks_view.render_error(Some(&e.to_string()));
            return self.bookmarks_view.html().to_string();
        }

        let recipe = self.model.recipe().await;
        self.recipe_view.render(recipe);
        self.render_bookmarks().await;
        join(&[self.recipe_view.html(), self.bookmarks_view.html()])
    }

    pub async fn show_bookmarks(&mut self) -> String {
        self.render_bookmarks().await;
        self.bookmarks_view.html().to_string()
    }

    pub async fn remove_bookmark(&mut self, id: &str) -> String {
        if let Err(e) = self.model.delete_bookmark(id).await {
            self.bookmarks_view.render_error(Some(&e.to_string()));
            return self.bookmarks_view.html().to_string();
        }
        self.show_bookmarks().await
    }

    async fn render_bookmarks(&mut self) {
        let bookmarks = self.model.bookmarks().await;
        self.bookmarks_view.render(Some(bookmarks));
    }

    pub async fn upload(&mut self, form: &RecipeForm) -> String {
        self.recipe_view.render_spinner();

        match self.model.add_recipe(form).await {
            Ok(recipe) => {
                info!(id = %recipe.id, "Recipe uploaded");
                self.recipe_view.render(Some(recipe));
                let recipe_html = self.recipe_view.html().to_string();
                self.recipe_view.render_message(UPLOAD_SUCCESS_MESSAGE);
                self.render_bookmarks().await;
                join(&[
                    self.recipe_view.html(),
                    recipe_html.as_str(),
                    self.bookmarks_view.html(),
                ])
            }
            Err(e) => {
                self.recipe_view.render_error(Some(&e.to_string()));
                self.recipe_view.html().to_string()
            }
        }
    }
}

fn join(parts: &[&str]) -> String {
    parts.join("\n")
}
