//! Recipe source adapters: turn a fetched HTML document into the raw
//! name / ingredient lines / step lines triple.

use crate::error::TransformError;
use crate::recipe::SourceRecipe;
use scraper::Html;

mod fetch;
mod html_class;
mod json_ld;

pub use self::fetch::fetch_document;
pub use self::html_class::HtmlClassExtractor;
pub use self::json_ld::JsonLdExtractor;

pub trait Extractor {
    fn can_parse(&self, document: &Html) -> bool;
    fn parse(&self, document: &Html) -> Result<SourceRecipe, TransformError>;
}

/// Run the extractors in priority order against a document
pub fn extract(document: &Html) -> Result<SourceRecipe, TransformError> {
    let extractors: [&dyn Extractor; 2] = [&JsonLdExtractor, &HtmlClassExtractor];
    for extractor in extractors {
        if extractor.can_parse(document) {
            return extractor.parse(document);
        }
    }
    Err(TransformError::NoExtractorMatched)
}
