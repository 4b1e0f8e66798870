use thiserror::Error;

/// Errors that can occur while fetching or transforming a recipe
#[derive(Error, Debug)]
pub enum TransformError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Error building HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Failed to extract a recipe from the fetched page
    #[error("Failed to parse recipe: {0}")]
    Parse(String),

    /// No extractor could pull a recipe out of the page
    #[error("No extractor could parse the recipe from this webpage")]
    NoExtractorMatched,

    /// A numeric quantity token could not be parsed.
    ///
    /// Recoverable: the ingredient parser catches this and skips
    /// amount/unit assignment for the offending line.
    #[error("Malformed quantity: {0}")]
    MalformedQuantity(String),

    /// A substitution action was applied to an ingredient that cannot
    /// support it, e.g. rescaling an ingredient with no amount
    #[error("Invalid substitution: {0}")]
    InvalidSubstitution(String),

    /// Transformation profile name is not one of the six known profiles
    #[error("Unknown transformation profile: {0}")]
    UnknownProfile(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
