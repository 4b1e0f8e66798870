//! Substitution rule engine.
//!
//! Resolves rules per ingredient in four tiers (exceptions, names,
//! adjectives, categories), applies the matched rules and records the
//! resulting text switches. Removals and additions are merged into the
//! ingredient lists after the per-ingredient pass.

use crate::error::TransformError;
use crate::model::{Ingredient, IngredientHandle, SwitchMap};
use crate::rules::{Rule, RuleSet};
use crate::vocab::MEAT;
use log::debug;

struct RuleOutcome {
    removed: bool,
    new_name: String,
}

/// Run one rule against one ingredient: substitutions in order, then
/// additions, then removal. Additions read the ingredient as it was
/// before the substitutions ran. A removal yields an empty switch value.
fn apply_rule(
    handle: &IngredientHandle,
    rule: &Rule,
    added: &mut Vec<Ingredient>,
) -> Result<RuleOutcome, TransformError> {
    let original = handle.borrow().clone();
    let mut new_name = String::new();
    {
        let mut ingredient = handle.borrow_mut();
        for action in &rule.substitutions {
            new_name = action.apply(&mut ingredient)?;
        }
    }
    for addition in &rule.additions {
        added.push(addition.build(&original)?);
    }
    if rule.remove {
        new_name.clear();
    }
    Ok(RuleOutcome {
        removed: rule.remove,
        new_name,
    })
}

/// Map both the pre-change full name and the pre-change bare name to the
/// post-change text. Full name first, so longer keys are replaced first.
fn record(switches: &mut SwitchMap, full_name: &str, name: &str, new_name: &str) {
    switches.insert(full_name, new_name);
    switches.insert(name, new_name);
}

/// Apply a rule set to one step's ingredients, in association order.
///
/// Mutates ingredients in place through their shared handles, appends
/// additions to both the recipe list and the step list, removes scheduled
/// ingredients from both, and accumulates text switches. Returns the
/// removed handles so the caller can purge them from the remaining steps.
pub fn apply(
    step_ingredients: &mut Vec<IngredientHandle>,
    recipe_ingredients: &mut Vec<IngredientHandle>,
    switches: &mut SwitchMap,
    rules: &RuleSet,
    vegetarian: bool,
) -> Result<Vec<IngredientHandle>, TransformError> {
    let mut added: Vec<Ingredient> = Vec::new();
    let mut removed: Vec<IngredientHandle> = Vec::new();

    for handle in step_ingredients.iter() {
        // Switch keys and the name/adjective lookups come from a snapshot
        // taken before any rule runs
        let (name, full_name, adjective) = {
            let ingredient = handle.borrow();
            (
                ingredient.name.clone(),
                ingredient.full_name(),
                ingredient.adjective.clone(),
            )
        };

        // Exceptions: exact full-name match skips every other tier
        if let Some(rule) = rules.exceptions.get(full_name.as_str()) {
            let outcome = apply_rule(handle, rule, &mut added)?;
            debug!("exception rule: {} -> {}", full_name, outcome.new_name);
            record(switches, &full_name, &name, &outcome.new_name);
            if outcome.removed {
                removed.push(handle.clone());
            }
            continue;
        }

        // Names, falling back to adjectives when no name rule matches
        let mut name_tier_matched = false;
        if let Some(rule) = rules.names.get(name.as_str()) {
            name_tier_matched = true;
            let outcome = apply_rule(handle, rule, &mut added)?;
            debug!("name rule: {} -> {}", full_name, outcome.new_name);
            record(switches, &full_name, &name, &outcome.new_name);
            if outcome.removed {
                removed.push(handle.clone());
                continue;
            }
        }
        if !name_tier_matched {
            if let Some(rule) = adjective
                .as_deref()
                .and_then(|adj| rules.adjectives.get(adj))
            {
                let outcome = apply_rule(handle, rule, &mut added)?;
                debug!("adjective rule: {} -> {}", full_name, outcome.new_name);
                record(switches, &full_name, &name, &outcome.new_name);
                if outcome.removed {
                    removed.push(handle.clone());
                    continue;
                }
            }
        }

        // Categories are evaluated independently of the name tier, but
        // against the live category: a name rule that recategorizes the
        // ingredient steers it away from its old category's rule
        let category = handle.borrow().category.clone();
        if let Some((cat, rule)) = category
            .as_deref()
            .and_then(|c| rules.categories.get(c).map(|r| (c, r)))
        {
            let outcome = apply_rule(handle, rule, &mut added)?;
            debug!("category rule: {} -> {}", full_name, outcome.new_name);
            record(switches, &full_name, &name, &outcome.new_name);
            if vegetarian && MEAT.contains(&cat) {
                // meat went vegetarian: make the generic word follow, and
                // drop the stale meat word when it no longer appears
                switches.insert("meat", &outcome.new_name);
                if outcome.new_name.rsplit(' ').next() != Some(cat) {
                    switches.insert(&format!(" {}", cat), "");
                }
            }
            if outcome.removed {
                removed.push(handle.clone());
            }
        }
    }

    for gone in &removed {
        recipe_ingredients.retain(|h| !IngredientHandle::ptr_eq(h, gone));
        step_ingredients.retain(|h| !IngredientHandle::ptr_eq(h, gone));
    }

    // Merge additions with an existing ingredient of the same name and
    // adjective by summing amounts; append as new otherwise
    for new_ingredient in added {
        let existing = recipe_ingredients
            .iter()
            .find(|h| h.borrow().same_kind(&new_ingredient))
            .cloned();
        match existing {
            Some(handle) => {
                let mut ingredient = handle.borrow_mut();
                ingredient.amount = match (ingredient.amount, new_ingredient.amount) {
                    (Some(a), Some(b)) => Some(a + b),
                    (a, b) => a.or(b),
                };
            }
            None => {
                let handle = new_ingredient.into_handle();
                recipe_ingredients.push(handle.clone());
                step_ingredients.push(handle);
            }
        }
    }

    Ok(removed)
}
