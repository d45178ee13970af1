use forkify_model::view::markup::{escape_html, icon};
use forkify_model::{Ingredient, Markup, Recipe, SearchResult};

/// Quantity as shown on the recipe card: whole numbers stay whole, others get at most 2 decimals
pub fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        None => String::new(),
        Some(q) if q.fract() == 0.0 => format!("{}", q as i64),
        Some(q) => {
            let fixed = format!("{:.2}", q);
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn ingredient_markup(ingredient: &Ingredient, icons: &str) -> String {
    format!(
        r#"<li class="recipe__ingredient">{}<div class="recipe__quantity">{}</div><div class="recipe__description"><span class="recipe__unit">{}</span> {}</div></li>"#,
        icon(icons, "check"),
        format_quantity(ingredient.quantity),
        escape_html(&ingredient.unit),
        escape_html(&ingredient.description)
    )
}

pub struct RecipeMarkup;

impl Markup for RecipeMarkup {
    type Data = Recipe;

    fn no_data_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }

    fn generate(&self, recipe: &Recipe, icons: &str) -> String {
        let ingredients: String = recipe
            .ingredients
            .iter()
            .map(|i| ingredient_markup(i, icons))
            .collect();
        let bookmark_icon = if recipe.bookmarked {
            "bookmark-fill"
        } else {
            "bookmark"
        };
        let user_generated = if recipe.key.is_some() {
            format!(r#"<div class="recipe__user-generated">{}</div>"#, icon(icons, "user"))
        } else {
            String::new()
        };

        format!(
            concat!(
                r#"<figure class="recipe__fig"><img src="{image}" alt="{title}" class="recipe__img" />"#,
                r#"<h1 class="recipe__title"><span>{title}</span></h1></figure>"#,
                r#"<div class="recipe__details">"#,
                r#"<div class="recipe__info"><span class="recipe__info-data recipe__info-data--minutes">{time}</span> minutes</div>"#,
                r#"<div class="recipe__info"><span class="recipe__info-data recipe__info-data--people">{servings}</span> servings</div>"#,
                r#"{user}<button class="btn--round btn--bookmark">{bookmark}</button></div>"#,
                r#"<div class="recipe__ingredients"><ul class="recipe__ingredient-list">{ingredients}</ul></div>"#,
                r#"<div class="recipe__directions"><p>This recipe was carefully designed and tested by "#,
                r#"<span class="recipe__publisher">{publisher}</span>.</p>"#,
                r#"<a class="btn--small recipe__btn" href="{source}" target="_blank">Directions</a></div>"#
            ),
            image = escape_html(&recipe.image),
            title = escape_html(&recipe.title),
            time = recipe.cooking_time,
            servings = recipe.servings,
            user = user_generated,
            bookmark = icon(icons, bookmark_icon),
            ingredients = ingredients,
            publisher = escape_html(&recipe.publisher),
            source = escape_html(&recipe.source_url),
        )
    }
}

/// Shared preview row for search results and bookmarks
fn preview_markup(
    id: &str,
    title: &str,
    publisher: &str,
    image: &str,
    user: bool,
    active: bool,
) -> String {
    format!(
        r##"<li class="preview"><a class="preview__link{}" href="#{}"><figure class="preview__fig"><img src="{}" alt="{}" /></figure><div class="preview__data"><h4 class="preview__title">{}</h4><p class="preview__publisher">{}</p>{}</div></a></li>"##,
        if active { " preview__link--active" } else { "" },
        escape_html(id),
        escape_html(image),
        escape_html(title),
        escape_html(title),
        escape_html(publisher),
        if user { r#"<div class="preview__user-generated"></div>"# } else { "" },
    )
}

/// Search results page; `active` highlights the recipe being viewed
pub struct ResultsMarkup {
    pub active: Option<String>,
}

impl Markup for ResultsMarkup {
    type Data = Vec<SearchResult>;

    fn no_data_message(&self) -> &str {
        "No recipes found for your query! Please try again ;)"
    }

    fn generate(&self, results: &Self::Data, _icons: &str) -> String {
        results
            .iter()
            .map(|r| {
                preview_markup(
                    &r.id,
                    &r.title,
                    &r.publisher,
                    &r.image,
                    r.key.is_some(),
                    self.active.as_deref() == Some(r.id.as_str()),
                )
            })
            .collect()
    }

    fn is_empty(data: &Self::Data) -> bool {
        data.is_empty()
    }
}

pub struct BookmarksMarkup {
    pub active: Option<String>,
}

impl Markup for BookmarksMarkup {
    type Data = Vec<Recipe>;

    fn no_data_message(&self) -> &str {
        "No bookmarks yet. Find a nice recipe and bookmark it ;)"
    }

    fn generate(&self, bookmarks: &Self::Data, _icons: &str) -> String {
        bookmarks
            .iter()
            .map(|b| {
                preview_markup(
                    &b.id,
                    &b.title,
                    &b.publisher,
                    &b.image,
                    b.key.is_some(),
                    self.active.as_deref() == Some(b.id.as_str()),
                )
            })
            .collect()
    }

    fn is_empty(data: &Self::Data) -> bool {
        data.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub pages: usize,
}

pub struct PaginationMarkup;

impl Markup for PaginationMarkup {
    type Data = Pagination;

    fn no_data_message(&self) -> &str {
        ""
    }

    fn generate(&self, p: &Pagination, icons: &str) -> String {
        let current = p.page as usize;
        let prev = if current > 1 && current <= p.pages {
            format!(
                r#"<button data-goto="{}" class="btn--inline pagination__btn--prev">{}<span>Page {}</span></button>"#,
                current - 1,
                icon(icons, "arrow-left"),
                current - 1
            )
        } else {
            String::new()
        };
        let next = if current < p.pages {
            format!(
                r#"<button data-goto="{}" class="btn--inline pagination__btn--next"><span>Page {}</span>{}</button>"#,
                current + 1,
                current + 1,
                icon(icons, "arrow-right")
            )
        } else {
            String::new()
        };
        format!("{}{}", prev, next)
    }
}

/// Search bar; only used for reading its query
pub struct SearchMarkup;

impl Markup for SearchMarkup {
    type Data = String;

    fn no_data_message(&self) -> &str {
        "Please enter a search term"
    }

    fn generate(&self, query: &String, icons: &str) -> String {
        format!(
            r#"<input type="text" class="search__field" value="{}" /><button class="btn search__btn">{}<span>Search</span></button>"#,
            escape_html(query),
            icon(icons, "search")
        )
    }
}
