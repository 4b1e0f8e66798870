//! Recipe transformation engine: fetch a recipe, parse its ingredient
//! lines into structured records, then rewrite the whole recipe towards a
//! named profile (healthy, unhealthy, vegetarian, meatify, thai or
//! mediterranean).

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod extractors;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod recipe;
pub mod rewrite;
pub mod rules;
pub mod steps;
pub mod vocab;

pub use crate::config::AppConfig;
pub use crate::error::TransformError;
pub use crate::lexicon::{Lexicon, StaticLexicon};
pub use crate::recipe::{Recipe, SourceRecipe};
pub use crate::rules::Profile;

/// Fetch a recipe page and extract its raw name/ingredients/steps triple
pub fn fetch_recipe(url: &str, config: &AppConfig) -> Result<SourceRecipe, TransformError> {
    let document = extractors::fetch_document(url, config)?;
    extractors::extract(&document)
}

/// Fetch, parse and analyze a recipe in one call
pub fn import_recipe(url: &str, config: &AppConfig) -> Result<Recipe, TransformError> {
    let source = fetch_recipe(url, config)?;
    Ok(Recipe::new(source, &StaticLexicon))
}
