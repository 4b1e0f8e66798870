//! Substitution rules.
//!
//! A [`RuleSet`] bundles four keyed rule tables (exact full-name
//! exceptions, core names, adjectives, categories) plus a method
//! replacement map. Rule sets are immutable values built once per
//! transformation and passed by reference into the engine.

mod tables;

use crate::error::TransformError;
use crate::model::Ingredient;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The six named transformation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Healthy,
    Unhealthy,
    Vegetarian,
    /// Non-vegetarian reversal
    Meatify,
    Thai,
    Mediterranean,
}

impl FromStr for Profile {
    type Err = TransformError;

    /// Exact lowercase match only; anything else is an input error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(Profile::Healthy),
            "unhealthy" => Ok(Profile::Unhealthy),
            "vegetarian" => Ok(Profile::Vegetarian),
            "meatify" => Ok(Profile::Meatify),
            "thai" => Ok(Profile::Thai),
            "mediterranean" => Ok(Profile::Mediterranean),
            other => Err(TransformError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Healthy => "healthy",
            Profile::Unhealthy => "unhealthy",
            Profile::Vegetarian => "vegetarian",
            Profile::Meatify => "meatify",
            Profile::Thai => "thai",
            Profile::Mediterranean => "mediterranean",
        };
        write!(f, "{}", name)
    }
}

/// One field-mutating substitution action
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Set the core name
    Rename(&'static str),
    /// Set or clear the adjective
    Requalify(Option<&'static str>),
    /// Set or clear the category
    Recategorize(Option<&'static str>),
    /// Multiply the amount by a factor; an ingredient without an amount
    /// cannot be rescaled
    Rescale(f64),
    /// Set the unit
    Reunit(&'static str),
}

impl Action {
    /// Mutate the ingredient and return its renderable full name
    pub fn apply(&self, ingredient: &mut Ingredient) -> Result<String, TransformError> {
        match self {
            Action::Rename(name) => ingredient.name = name.to_string(),
            Action::Requalify(adjective) => {
                ingredient.adjective = adjective.map(str::to_string);
            }
            Action::Recategorize(category) => {
                ingredient.category = category.map(str::to_string);
            }
            Action::Rescale(factor) => {
                let amount = ingredient.amount.ok_or_else(|| {
                    TransformError::InvalidSubstitution(format!(
                        "cannot rescale {} without an amount",
                        ingredient.name
                    ))
                })?;
                ingredient.amount = Some(amount * factor);
            }
            Action::Reunit(unit) => ingredient.unit = Some(unit.to_string()),
        }
        Ok(ingredient.full_name())
    }
}

/// An ingredient-creating action. The source ingredient is read as it was
/// before the rule's substitutions ran.
#[derive(Debug, Clone, Copy)]
pub enum Addition {
    /// Promote the source's adjective into a standalone ingredient,
    /// keeping amount, unit and category
    Base,
    /// New ingredient whose amount is the source amount scaled by `factor`
    /// and whose unit is the source unit
    Derived {
        name: &'static str,
        adjective: Option<&'static str>,
        category: Option<&'static str>,
        factor: f64,
    },
}

impl Addition {
    pub fn build(&self, source: &Ingredient) -> Result<Ingredient, TransformError> {
        match self {
            Addition::Base => {
                let name = source
                    .adjective
                    .clone()
                    .filter(|adj| !adj.is_empty())
                    .ok_or_else(|| {
                        TransformError::InvalidSubstitution(format!(
                            "{} has no qualifier to promote",
                            source.name
                        ))
                    })?;
                Ok(Ingredient {
                    name,
                    adjective: None,
                    category: source.category.clone(),
                    amount: source.amount,
                    unit: source.unit.clone(),
                })
            }
            Addition::Derived {
                name,
                adjective,
                category,
                factor,
            } => {
                let amount = source.amount.ok_or_else(|| {
                    TransformError::InvalidSubstitution(format!(
                        "cannot derive {} from {} without an amount",
                        name, source.name
                    ))
                })?;
                Ok(Ingredient::new(
                    *name,
                    *adjective,
                    *category,
                    Some(amount * factor),
                    source.unit.as_deref(),
                ))
            }
        }
    }
}

/// One rule: substitutions run in order against the matched ingredient,
/// additions create new ingredients, and `remove` schedules deletion
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub substitutions: Vec<Action>,
    pub additions: Vec<Addition>,
    pub remove: bool,
}

impl Rule {
    pub fn substitute(actions: &[Action]) -> Self {
        Rule {
            substitutions: actions.to_vec(),
            ..Default::default()
        }
    }

    pub fn add(mut self, addition: Addition) -> Self {
        self.additions.push(addition);
        self
    }

    pub fn removing(mut self) -> Self {
        self.remove = true;
        self
    }
}

/// Immutable rule bundle for one profile
#[derive(Debug, Default)]
pub struct RuleSet {
    /// Exact full "adjective name" matches; highest priority
    pub exceptions: HashMap<&'static str, Rule>,
    /// Core-name matches
    pub names: HashMap<&'static str, Rule>,
    /// Adjective matches
    pub adjectives: HashMap<&'static str, Rule>,
    /// Category matches; evaluated independently of the name tier
    pub categories: HashMap<&'static str, Rule>,
    /// Cooking-method replacements
    pub methods: HashMap<&'static str, &'static str>,
}

impl RuleSet {
    /// Build the rule bundle for a profile. `healthy` and `unhealthy`
    /// carry baking-specific tables selected by the `bake` flag.
    pub fn for_profile(profile: Profile, bake: bool) -> RuleSet {
        match (profile, bake) {
            (Profile::Healthy, false) => tables::healthy(),
            (Profile::Healthy, true) => tables::healthy_baking(),
            (Profile::Unhealthy, false) => tables::unhealthy(),
            (Profile::Unhealthy, true) => tables::unhealthy_baking(),
            (Profile::Vegetarian, _) => tables::vegetarian(),
            (Profile::Meatify, _) => tables::meatify(),
            (Profile::Thai, _) => tables::thai(),
            (Profile::Mediterranean, _) => tables::mediterranean(),
        }
    }

    pub fn method(&self, method: &str) -> Option<&'static str> {
        self.methods.get(method).copied()
    }
}
