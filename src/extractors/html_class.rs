use crate::error::TransformError;
use crate::extractors::Extractor;
use crate::recipe::SourceRecipe;
use log::debug;
use scraper::{Html, Selector};

/// Fallback extractor for allrecipes-style markup, where the recipe is
/// spread across well-known element classes instead of JSON-LD
pub struct HtmlClassExtractor;

const TITLE: &str = "h1#recipe-main-content";
const INGREDIENTS: &str = "span.recipe-ingred_txt.added";
const DIRECTIONS: &str = "ol.list-numbers.recipe-directions__list li span";

fn element_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

impl Extractor for HtmlClassExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        let selector = Selector::parse(INGREDIENTS).unwrap();
        document.select(&selector).next().is_some()
    }

    fn parse(&self, document: &Html) -> Result<SourceRecipe, TransformError> {
        let title = Selector::parse(TITLE).unwrap();
        let ingredients = Selector::parse(INGREDIENTS).unwrap();
        let directions = Selector::parse(DIRECTIONS).unwrap();

        let name = document
            .select(&title)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
            .ok_or_else(|| TransformError::Parse("missing recipe title".to_string()))?;

        let ingredient_lines = element_texts(document, &ingredients);
        let step_lines = element_texts(document, &directions);

        if ingredient_lines.is_empty() || step_lines.is_empty() {
            return Err(TransformError::Parse(
                "missing ingredient or direction markup".to_string(),
            ));
        }

        debug!(
            "extracted \"{}\" from class markup ({} ingredients, {} steps)",
            name,
            ingredient_lines.len(),
            step_lines.len()
        );
        Ok(SourceRecipe {
            name,
            ingredient_lines,
            step_lines,
        })
    }
}
