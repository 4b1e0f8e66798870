//! The `Recipe` aggregate and the transformation orchestrator.

use crate::engine;
use crate::error::TransformError;
use crate::extract::extract_tools_methods;
use crate::lexicon::Lexicon;
use crate::model::{Ingredient, IngredientHandle, RecipeExport, StepExport, SwitchMap};
use crate::parser::parse_ingredient;
use crate::rewrite;
use crate::rules::{Profile, RuleSet};
use crate::steps::Step;
use crate::vocab::SYNONYMS;
use log::info;
use std::fmt;

/// The raw triple handed over by a recipe source adapter
#[derive(Debug, Clone)]
pub struct SourceRecipe {
    pub name: String,
    pub ingredient_lines: Vec<String>,
    pub step_lines: Vec<String>,
}

/// A parsed recipe with its association and method analysis done.
///
/// Switch maps accumulate for the lifetime of the value; they are not
/// reset between transformations, so repeated transforms keep earlier
/// switches in play.
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<IngredientHandle>,
    pub steps: Vec<Step>,
    pub tools: Vec<String>,
    pub primary_method: Option<String>,
    pub other_methods: Vec<String>,
    pub bake: bool,
    pub ingredient_switches: SwitchMap,
    pub method_switches: SwitchMap,
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

impl Recipe {
    /// Parse ingredient lines, number the steps, associate ingredients
    /// with steps and run the tool/method analysis
    pub fn new(source: SourceRecipe, lexicon: &dyn Lexicon) -> Recipe {
        let ingredients: Vec<IngredientHandle> = source
            .ingredient_lines
            .iter()
            .map(|line| parse_ingredient(line, lexicon).into_handle())
            .collect();

        let mut steps: Vec<Step> = source
            .step_lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let mut text = format!("{}. {}", index + 1, line.trim());
                // step text uses the same synonyms as parsed names, so
                // association keys keep matching
                for (from, to) in SYNONYMS {
                    text = text.replace(from, to);
                }
                Step::new(text, &ingredients)
            })
            .collect();

        let summary = extract_tools_methods(&mut steps, lexicon);

        Recipe {
            name: source.name,
            ingredients,
            steps,
            tools: summary.tools,
            primary_method: summary.primary_method,
            other_methods: summary.other_methods,
            bake: summary.bake,
            ingredient_switches: SwitchMap::new(),
            method_switches: SwitchMap::new(),
        }
    }

    /// Apply one transformation profile in place.
    ///
    /// Two full passes: the rule engine first visits every step to
    /// populate the switch maps, then the rewriter applies them to the
    /// step text. `unhealthy` finishes by appending its extra ingredient
    /// and final step.
    pub fn transform(
        &mut self,
        profile: Profile,
        lexicon: &dyn Lexicon,
    ) -> Result<(), TransformError> {
        info!("applying the {} profile (bake: {})", profile, self.bake);
        let rules = RuleSet::for_profile(profile, self.bake);
        let vegetarian = profile == Profile::Vegetarian;

        let Recipe {
            steps,
            ingredients,
            ingredient_switches,
            method_switches,
            ..
        } = self;

        for index in 0..steps.len() {
            let removed = engine::apply(
                &mut steps[index].ingredients,
                ingredients,
                ingredient_switches,
                &rules,
                vegetarian,
            )?;

            // only profiles carrying method rules touch the method lists;
            // switches accumulated by an earlier transform stay text-only
            if !rules.methods.is_empty() {
                for method in &steps[index].methods {
                    if let Some(replacement) = rules.method(method) {
                        method_switches.insert(method, replacement);
                    }
                }
                steps[index].methods = steps[index]
                    .methods
                    .iter()
                    .map(|method| {
                        method_switches
                            .get(method)
                            .map(str::to_string)
                            .unwrap_or_else(|| method.clone())
                    })
                    .collect();
            }

            // removed ingredients disappear from every step, keeping step
            // references a subset of the recipe list
            if !removed.is_empty() {
                for (other, step) in steps.iter_mut().enumerate() {
                    if other == index {
                        continue;
                    }
                    step.ingredients
                        .retain(|h| !removed.iter().any(|gone| IngredientHandle::ptr_eq(h, gone)));
                }
            }
        }

        rewrite::alter_steps(steps, ingredient_switches, method_switches, lexicon);

        if profile == Profile::Unhealthy {
            self.add_indulgence();
        }
        Ok(())
    }

    /// The fixed `unhealthy` side effect: one extra ingredient and one
    /// extra numbered step, frosting when baking and salt otherwise
    fn add_indulgence(&mut self) {
        let next = self
            .steps
            .last()
            .and_then(|step| leading_number(&step.text))
            .unwrap_or(self.steps.len() as u32)
            + 1;

        let (ingredient, text, method) = if self.bake {
            (
                Ingredient::new("frosting", Some("chocolate"), Some("topping"), Some(2.0), Some("cups")),
                format!("{}. Spread frosting over everything.", next),
                "spread",
            )
        } else {
            (
                Ingredient::new("salt", None, Some("seasoning"), None, None),
                format!("{}. Sprinkle a lot of extra salt over the whole meal.", next),
                "sprinkle",
            )
        };

        let handle = ingredient.into_handle();
        self.ingredients.push(handle.clone());
        self.steps.push(Step {
            text,
            ingredients: vec![handle],
            methods: vec![method.to_string()],
        });
    }

    /// Snapshot the aggregate for serialization
    pub fn export(&self) -> RecipeExport {
        RecipeExport {
            ingredients: self.ingredients.iter().map(|h| h.borrow().clone()).collect(),
            tools: self.tools.clone(),
            primary_method: self.primary_method.clone(),
            other_methods: self.other_methods.clone(),
            steps: self
                .steps
                .iter()
                .map(|step| StepExport {
                    text: step.text.clone(),
                    methods: step.methods.clone(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "\nIngredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "{}", ingredient.borrow())?;
        }
        writeln!(f, "\nTools: {}", self.tools.join(", "))?;
        writeln!(
            f,
            "Primary Method: {}",
            self.primary_method.as_deref().unwrap_or("none")
        )?;
        writeln!(f, "Other Methods: {}", self.other_methods.join(", "))?;
        writeln!(f, "Baking?: {}", self.bake)?;
        writeln!(f, "\nSteps:")?;
        for step in &self.steps {
            writeln!(f, "{}", step.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::StaticLexicon;

    fn source(ingredients: &[&str], steps: &[&str]) -> SourceRecipe {
        SourceRecipe {
            name: "Test Recipe".to_string(),
            ingredient_lines: ingredients.iter().map(|s| s.to_string()).collect(),
            step_lines: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn recipe(ingredients: &[&str], steps: &[&str]) -> Recipe {
        Recipe::new(source(ingredients, steps), &StaticLexicon)
    }

    #[test]
    fn test_construction_numbers_steps_and_associates() {
        let recipe = recipe(
            &["2 cups chopped yellow onion", "1/2 teaspoon salt"],
            &["Cook the onion in a pan.", "Season with salt."],
        );
        assert_eq!(recipe.steps[0].text, "1. Cook the onion in a pan.");
        assert_eq!(recipe.steps[1].text, "2. Season with salt.");
        assert_eq!(recipe.steps[0].ingredients.len(), 1);
        assert_eq!(recipe.steps[1].ingredients.len(), 1);
        assert_eq!(recipe.tools, vec!["pan"]);
        assert_eq!(recipe.primary_method.as_deref(), Some("cook"));
    }

    #[test]
    fn test_synonyms_rewrite_step_text() {
        let recipe = recipe(
            &["4 cups chicken stock"],
            &["Pour in the stock and simmer."],
        );
        assert_eq!(recipe.steps[0].text, "1. Pour in the broth and simmer.");
        // the renamed ingredient still associates with the step
        assert_eq!(recipe.steps[0].ingredients.len(), 1);
    }

    #[test]
    fn test_unhealthy_adds_salt_and_final_step() {
        let mut recipe = recipe(
            &["1 head lettuce", "2 cups croutons"],
            &["Toss the lettuce and croutons.", "Mix in the dressing."],
        );
        assert!(!recipe.bake);
        let ingredients_before = recipe.ingredients.len();
        let steps_before = recipe.steps.len();

        recipe.transform(Profile::Unhealthy, &StaticLexicon).unwrap();

        assert_eq!(recipe.ingredients.len(), ingredients_before + 1);
        assert_eq!(recipe.steps.len(), steps_before + 1);
        let last = recipe.steps.last().unwrap();
        assert_eq!(last.text, "3. Sprinkle a lot of extra salt over the whole meal.");
        assert_eq!(last.methods, vec!["sprinkle"]);
        let salt = recipe.ingredients.last().unwrap().borrow();
        assert_eq!(salt.name, "salt");
        assert_eq!(salt.category.as_deref(), Some("seasoning"));
    }

    #[test]
    fn test_unhealthy_baking_adds_frosting() {
        let mut recipe = recipe(
            &["2 cups flour", "1 cup sugar"],
            &["Mix the flour and sugar.", "Bake for 30 minutes.", "Bake until golden."],
        );
        assert!(recipe.bake);

        recipe.transform(Profile::Unhealthy, &StaticLexicon).unwrap();

        let last = recipe.steps.last().unwrap();
        assert_eq!(last.text, "4. Spread frosting over everything.");
        let frosting = recipe.ingredients.last().unwrap().borrow();
        assert_eq!(frosting.name, "frosting");
        assert_eq!(frosting.amount, Some(2.0));
        assert_eq!(frosting.unit.as_deref(), Some("cups"));
    }

    #[test]
    fn test_healthy_method_switch_rewrites_text_and_lists() {
        let mut recipe = recipe(
            &["1 cup rice"],
            &["Fry the rice in a pan.", "Serve hot."],
        );
        recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();

        assert_eq!(recipe.steps[0].methods, vec!["saute"]);
        // "Fry" keeps its capital; the lowercase occurrence is rewritten
        assert_eq!(recipe.steps[0].text, "1. Fry the quinoa in a pan.");
        assert_eq!(recipe.ingredients[0].borrow().name, "quinoa");
    }

    #[test]
    fn test_profiles_without_method_rules_leave_method_lists_alone() {
        let mut recipe = recipe(&["1 cup rice"], &["Fry the rice."]);
        recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();
        assert_eq!(recipe.steps[0].methods, vec!["saute"]);
        recipe.transform(Profile::Unhealthy, &StaticLexicon).unwrap();
        assert_eq!(recipe.steps[0].methods, vec!["fry"]);

        // the accumulated switches still map "fry" to "saute" from the
        // healthy pass; vegetarian carries no method rules, so the list
        // must not be pushed through them again
        recipe
            .transform(Profile::Vegetarian, &StaticLexicon)
            .unwrap();
        assert_eq!(recipe.steps[0].methods, vec!["fry"]);
    }

    #[test]
    fn test_repeated_transform_does_not_resubstitute_names() {
        let mut recipe = recipe(&["1 cup rice"], &["Boil the rice."]);
        recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();
        assert_eq!(recipe.ingredients[0].borrow().name, "quinoa");
        assert_eq!(recipe.ingredient_switches.get("rice"), Some("quinoa"));

        // applying the profile again leaves the renamed ingredient alone:
        // "quinoa" is no longer a key in the names table
        recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();
        assert_eq!(recipe.ingredients[0].borrow().name, "quinoa");
        assert_eq!(recipe.ingredient_switches.len(), 1);
    }

    #[test]
    fn test_removed_ingredient_disappears_from_every_step() {
        let mut recipe = recipe(
            &["1 cup butter", "2 cups flour"],
            &["Melt the butter.", "Stir the butter into the flour."],
        );
        recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();

        for step in &recipe.steps {
            for handle in &step.ingredients {
                assert!(
                    recipe
                        .ingredients
                        .iter()
                        .any(|h| IngredientHandle::ptr_eq(h, handle)),
                    "step references an ingredient outside the recipe list"
                );
                assert_ne!(handle.borrow().name, "butter");
            }
        }
    }

    #[test]
    fn test_export_shape() {
        let recipe = recipe(&["1/2 teaspoon salt"], &["Season with salt."]);
        let json = serde_json::to_value(recipe.export()).unwrap();
        assert!(json.get("ingredients").is_some());
        assert!(json.get("tools").is_some());
        assert!(json.get("primary_method").is_some());
        assert!(json.get("other_methods").is_some());
        assert_eq!(json["steps"][0]["text"], "1. Season with salt.");
    }
}
