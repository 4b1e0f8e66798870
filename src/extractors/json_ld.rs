use crate::error::TransformError;
use crate::extractors::Extractor;
use crate::recipe::SourceRecipe;
use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

pub struct JsonLdExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: String,
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: RecipeInstructions,
}

#[derive(Debug, Deserialize)]
struct RecipeInstructionObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<String>),
    MultipleObject(Vec<RecipeInstructionObject>),
    HowTo(Vec<HowTo>),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type")]
enum HowTo {
    HowToStep(HowToStep),
    HowToSection(HowToSection),
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<HowToStep>,
}

/// Decode entities until the text stops changing. Sites double-encode
/// their entities, and serializing the script text adds one more level.
fn decode_html_symbols(text: &str) -> String {
    let mut decoded = decode_html_entities(text).into_owned();
    loop {
        let next = decode_html_entities(&decoded).into_owned();
        if next == decoded {
            return decoded;
        }
        decoded = next;
    }
}

/// Split a single instruction blob into sentence-sized step lines
fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .collect()
}

fn step_texts(step: HowToStep) -> Vec<String> {
    let mut texts = Vec::new();
    if let Some(text) = step.text {
        texts.push(text);
    }
    if let Some(desc) = step.description {
        texts.push(desc);
    }
    texts
}

impl From<JsonLdRecipe> for SourceRecipe {
    fn from(recipe: JsonLdRecipe) -> Self {
        let step_lines = match recipe.recipe_instructions {
            RecipeInstructions::String(blob) => split_sentences(&decode_html_symbols(&blob)),
            RecipeInstructions::Multiple(lines) => lines
                .iter()
                .map(|line| decode_html_symbols(line))
                .collect(),
            RecipeInstructions::MultipleObject(objects) => objects
                .iter()
                .map(|obj| decode_html_symbols(&obj.text))
                .collect(),
            RecipeInstructions::HowTo(sections) => sections
                .into_iter()
                .flat_map(|section| match section {
                    HowTo::HowToStep(step) => step_texts(step),
                    HowTo::HowToSection(section) => section
                        .item_list_element
                        .into_iter()
                        .flat_map(step_texts)
                        .collect(),
                })
                .map(|text| decode_html_symbols(&text))
                .collect(),
        };

        SourceRecipe {
            name: decode_html_symbols(&recipe.name),
            ingredient_lines: recipe
                .recipe_ingredient
                .iter()
                .map(|line| decode_html_symbols(line))
                .collect(),
            step_lines,
        }
    }
}

/// Clean up the common ways sites mangle their JSON-LD blocks
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    cleaned = cleaned.replace(",]", "]").replace(",}", "}");
    cleaned.replace("<!--", "").replace("-->", "")
}

fn find_recipe_value(json_ld: &Value) -> Option<Value> {
    if json_ld.is_array() {
        return json_ld
            .as_array()
            .and_then(|arr| {
                arr.iter()
                    .find(|item| item.get("recipeInstructions").is_some())
            })
            .cloned();
    }
    if json_ld.get("recipeInstructions").is_some() {
        return Some(json_ld.clone());
    }
    if let Some(graph) = json_ld.get("@graph") {
        return graph
            .as_array()
            .and_then(|arr| {
                arr.iter()
                    .find(|item| item.get("@type") == Some(&Value::String("Recipe".to_string())))
            })
            .cloned();
    }
    None
}

impl Extractor for JsonLdExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();
        document.select(&selector).any(|script| {
            let cleaned_json = sanitize_json(&script.inner_html());
            serde_json::from_str::<Value>(&cleaned_json)
                .ok()
                .and_then(|json_ld| find_recipe_value(&json_ld))
                .is_some()
        })
    }

    fn parse(&self, document: &Html) -> Result<SourceRecipe, TransformError> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();

        // try each script block until one deserializes into a recipe
        for script in document.select(&selector) {
            let cleaned_json = sanitize_json(&script.inner_html());
            let Ok(json_ld) = serde_json::from_str::<Value>(&cleaned_json) else {
                continue;
            };
            let parsed = find_recipe_value(&json_ld)
                .and_then(|value| serde_json::from_value::<JsonLdRecipe>(value).ok());
            if let Some(recipe) = parsed {
                debug!("extracted \"{}\" from JSON-LD", recipe.name);
                return Ok(SourceRecipe::from(recipe));
            }
        }

        Err(TransformError::Parse(
            "no valid recipe in any JSON-LD script".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn create_html_document(json_ld: &str) -> Html {
        let html = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <script type="application/ld+json">
                    {}
                </script>
            </head>
            <body></body>
            </html>
            "#,
            json_ld
        );
        Html::parse_document(&html)
    }

    #[test]
    fn test_can_parse() {
        let document = create_html_document(
            r#"
            {
                "@context": "https://schema.org/",
                "@type": "Recipe",
                "name": "Test Recipe",
                "recipeIngredient": ["ingredient 1", "ingredient 2"],
                "recipeInstructions": ["step 1", "step 2"]
            }
            "#,
        );
        assert!(JsonLdExtractor.can_parse(&document));
    }

    #[test]
    fn test_cannot_parse_without_recipe() {
        let document = create_html_document(r#"{"@type": "WebSite", "name": "A Site"}"#);
        assert!(!JsonLdExtractor.can_parse(&document));
    }

    #[test]
    fn test_parse_string_instructions_split_into_sentences() {
        let document = create_html_document(
            r#"
            {
                "@context": "https://schema.org/",
                "@type": "Recipe",
                "name": "Chocolate Chip Cookies",
                "recipeIngredient": ["2 cups flour", "1 cup sugar"],
                "recipeInstructions": "Mix ingredients. Bake at 350F for 10 minutes."
            }
            "#,
        );

        let result = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(result.name, "Chocolate Chip Cookies");
        assert_eq!(result.ingredient_lines, vec!["2 cups flour", "1 cup sugar"]);
        assert_eq!(
            result.step_lines,
            vec!["Mix ingredients.", "Bake at 350F for 10 minutes."]
        );
    }

    #[test]
    fn test_parse_recipe_from_array_with_how_to_steps() {
        let document = create_html_document(
            r#"
            [
                {
                    "@context": "https://schema.org/",
                    "@type": "Recipe",
                    "name": "Pasta Carbonara",
                    "recipeIngredient": ["spaghetti", "eggs", "bacon"],
                    "recipeInstructions": [
                        {"@type": "HowToStep", "text": "Cook pasta"},
                        {"@type": "HowToStep", "text": "Fry bacon"},
                        {"@type": "HowToStep", "text": "Combine all ingredients"}
                    ]
                },
                {
                    "@type": "WebSite",
                    "name": "Recipe Website"
                }
            ]
            "#,
        );

        let result = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(result.name, "Pasta Carbonara");
        assert_eq!(result.ingredient_lines, vec!["spaghetti", "eggs", "bacon"]);
        assert_eq!(
            result.step_lines,
            vec!["Cook pasta", "Fry bacon", "Combine all ingredients"]
        );
    }

    #[test]
    fn test_parse_decodes_html_entities() {
        let document = create_html_document(
            r#"
            {
                "@type": "Recipe",
                "name": "Mac &amp;amp; Cheese",
                "recipeIngredient": ["1 pound macaroni"],
                "recipeInstructions": ["Boil the macaroni"]
            }
            "#,
        );
        let result = JsonLdExtractor.parse(&document).unwrap();
        assert_eq!(result.name, "Mac & Cheese");
    }
}
