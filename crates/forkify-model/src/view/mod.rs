//! Rendering base shared by every screen.
//!
//! A [`View`] is bound to one [`Container`] and renders through a [`Markup`]
//! implementation that knows the screen's data shape. The view itself never
//! looks inside the data.

pub mod markup;

use tracing::debug;

/// Render target: the inner HTML of one page element plus its search input
#[derive(Debug, Clone, Default)]
pub struct Container {
    name: String,
    html: String,
    search_field: String,
}

impl Container {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn clear(&mut self) {
        self.html.clear();
    }

    /// Insert markup as the container's first child (`afterbegin`)
    pub fn insert_afterbegin(&mut self, markup: &str) {
        self.html.insert_str(0, markup);
    }

    pub fn set_search_field(&mut self, value: &str) {
        self.search_field = value.to_string();
    }

    /// Read the search input and leave it empty
    pub fn take_search_field(&mut self) -> String {
        std::mem::take(&mut self.search_field)
    }
}

/// Per-screen markup generation
pub trait Markup {
    type Data: Clone;

    /// Shown by `render_error` when no message is given
    fn no_data_message(&self) -> &str;

    fn generate(&self, data: &Self::Data, icons: &str) -> String;

    /// Empty collections render the no-data error instead of markup
    fn is_empty(_data: &Self::Data) -> bool {
        false
    }
}

/// A screen: markup generator bound to its container
pub struct View<M: Markup> {
    markup: M,
    container: Container,
    icons: String,
    data: Option<M::Data>,
}

impl<M: Markup> View<M> {
    pub fn new(markup: M, container: Container, icons: &str) -> Self {
        Self {
            markup,
            container,
            icons: icons.to_string(),
            data: None,
        }
    }

    /// Render `data`, or the no-data error when it is absent or empty
    pub fn render(&mut self, data: Option<M::Data>) {
        let Some(data) = data.filter(|d| !M::is_empty(d)) else {
            self.render_error(None);
            return;
        };

        let html = self.markup.generate(&data, &self.icons);
        self.data = Some(data);
        self.replace(&html);
    }

    pub fn render_spinner(&mut self) {
        let html = markup::spinner(&self.icons);
        self.replace(&html);
    }

    pub fn render_error(&mut self, message: Option<&str>) {
        let message = message.unwrap_or_else(|| self.markup.no_data_message());
        debug!(container = self.container.name(), message, "Rendering error");
        let html = markup::error(&self.icons, message);
        self.replace(&html);
    }

    pub fn render_message(&mut self, message: &str) {
        let html = markup::message(&self.icons, message);
        self.replace(&html);
    }

    /// Current search input value; the input is cleared
    pub fn get_query(&mut self) -> String {
        self.container.take_search_field()
    }

    /// Data from the last successful `render`
    pub fn data(&self) -> Option<&M::Data> {
        self.data.as_ref()
    }

    pub fn markup_mut(&mut self) -> &mut M {
        &mut self.markup
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn html(&self) -> &str {
        self.container.html()
    }

    fn replace(&mut self, html: &str) {
        self.container.clear();
        self.container.insert_afterbegin(html);
    }
}
