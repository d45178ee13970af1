use crate::error::{ModelError, ModelResult};
use crate::recipe::{Ingredient, RecipeUpload};

/// Field name prefix marking an ingredient row (`ingredient-1`, `ingredient-2`, ...)
pub const INGREDIENT_PREFIX: &str = "ingredient";

/// Ordered name/value pairs submitted by the "add recipe" form.
///
/// Order is kept as entered, so ingredient rows come out in the order they
/// were filled in.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    fields: Vec<(String, String)>,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// Value of the first field with this name, empty if missing
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Parse every non-empty ingredient field as `quantity,unit,description`
    pub fn ingredients(&self) -> ModelResult<Vec<Ingredient>> {
        self.fields
            .iter()
            .filter(|(name, value)| name.starts_with(INGREDIENT_PREFIX) && !value.is_empty())
            .map(|(_, value)| parse_ingredient(value))
            .collect()
    }

    /// Build the submission payload; fails before any network call
    pub fn to_upload(&self) -> ModelResult<RecipeUpload> {
        let ingredients = self.ingredients()?;

        Ok(RecipeUpload {
            title: self.get("title").to_string(),
            source_url: self.get("sourceUrl").to_string(),
            image_url: self.get("image").to_string(),
            publisher: self.get("publisher").to_string(),
            cooking_time: parse_whole("cookingTime", self.get("cookingTime"))?,
            servings: parse_whole("servings", self.get("servings"))?,
            ingredients,
        })
    }
}

impl FromIterator<(String, String)> for RecipeForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

fn parse_ingredient(value: &str) -> ModelResult<Ingredient> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let &[quantity, unit, description] = parts.as_slice() else {
        return Err(ModelError::Validation(format!(
            "Wrong ingredient format '{}': use 'quantity,unit,description'",
            value
        )));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        let parsed = quantity
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| {
                let message = format!("Ingredient quantity '{}' is not a number", quantity);
                ModelError::Validation(message)
            })?;
        Some(parsed)
    };

    Ok(Ingredient::new(quantity, unit, description))
}

fn parse_whole(field: &str, value: &str) -> ModelResult<u32> {
    value.trim().parse::<u32>().map_err(|_| {
        ModelError::Validation(format!("{} must be a whole number, got '{}'", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> RecipeForm {
        RecipeForm::new()
            .with_field("title", "Test Bread")
            .with_field("sourceUrl", "http://example.com/bread")
            .with_field("image", "http://example.com/bread.jpg")
            .with_field("publisher", "Me")
            .with_field("cookingTime", "30")
            .with_field("servings", "4")
    }

    #[test]
    fn test_ingredients_parse_and_trim() {
        let form = base_form()
            .with_field("ingredient-1", "200,g,flour")
            .with_field("ingredient-2", "1, ,egg");

        let ingredients = form.ingredients().unwrap();
        assert_eq!(
            ingredients,
            vec![
                Ingredient::new(Some(200.0), "g", "flour"),
                Ingredient::new(Some(1.0), "", "egg"),
            ]
        );
    }

    #[test]
    fn test_empty_ingredient_fields_are_skipped() {
        let form = base_form()
            .with_field("ingredient-1", ",,salt")
            .with_field("ingredient-2", "")
            .with_field("ingredient-3", "");

        let ingredients = form.ingredients().unwrap();
        assert_eq!(ingredients, vec![Ingredient::new(None, "", "salt")]);
    }

    #[test]
    fn test_two_part_ingredient_is_rejected() {
        let form = base_form().with_field("ingredient-1", "200,g");
        let err = form.ingredients().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        let form = base_form().with_field("ingredient-1", "lots,g,sugar");
        assert!(form.to_upload().unwrap_err().is_validation());
    }

    #[test]
    fn test_to_upload_maps_form_names() {
        let upload = base_form()
            .with_field("ingredient-1", "0.5,kg,rice")
            .to_upload()
            .unwrap();

        assert_eq!(upload.title, "Test Bread");
        assert_eq!(upload.source_url, "http://example.com/bread");
        assert_eq!(upload.image_url, "http://example.com/bread.jpg");
        assert_eq!(upload.cooking_time, 30);
        assert_eq!(upload.servings, 4);
        assert_eq!(upload.ingredients.len(), 1);
    }

    #[test]
    fn test_non_numeric_servings_is_rejected() {
        let form = RecipeForm::new()
            .with_field("title", "X")
            .with_field("servings", "many")
            .with_field("cookingTime", "10");
        assert!(form.to_upload().unwrap_err().is_validation());
    }
}
