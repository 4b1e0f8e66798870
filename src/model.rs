use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One structured ingredient.
///
/// `name` is the canonical head noun after synonym resolution; `adjective`
/// is an optional qualifying phrase; `category` is a food-category tag or
/// `None` when unclassified. Substitution actions mutate fields in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub adjective: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// Shared mutable handle; steps reference the same ingredient cells as the
/// recipe's ingredient list, never copies
pub type IngredientHandle = Rc<RefCell<Ingredient>>;

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        adjective: Option<&str>,
        category: Option<&str>,
        amount: Option<f64>,
        unit: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            adjective: adjective.map(str::to_string),
            category: category.map(str::to_string),
            amount,
            unit: unit.map(str::to_string),
        }
    }

    pub fn into_handle(self) -> IngredientHandle {
        Rc::new(RefCell::new(self))
    }

    /// `adjective + " " + name` when an adjective is present, else `name`
    pub fn full_name(&self) -> String {
        match &self.adjective {
            Some(adj) if !adj.is_empty() => format!("{} {}", adj, self.name),
            _ => self.name.clone(),
        }
    }

    /// True when both ingredients are the same specific ingredient
    pub fn same_kind(&self, other: &Ingredient) -> bool {
        self.name == other.name && self.adjective == other.adjective
    }
}

impl fmt::Display for Ingredient {
    /// Renders like "1 cup olive oil"; absent fields are omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(amount) = self.amount {
            write!(f, "{} ", amount)?;
        }
        if let Some(unit) = &self.unit {
            write!(f, "{} ", unit)?;
        }
        write!(f, "{}", self.full_name())
    }
}

/// Accumulated old-text to new-text substitutions, applied in insertion
/// order during the rewrite pass.
///
/// Insertion order matters: for each substituted ingredient the full name
/// is inserted before the bare name, so full-name keys are replaced in
/// text first. Re-inserting a key updates its value in place.
#[derive(Debug, Default, Clone)]
pub struct SwitchMap {
    entries: Vec<(String, String)>,
}

impl SwitchMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Serializable snapshot of a transformed recipe
#[derive(Debug, Serialize)]
pub struct RecipeExport {
    pub ingredients: Vec<Ingredient>,
    pub tools: Vec<String>,
    pub primary_method: Option<String>,
    pub other_methods: Vec<String>,
    pub steps: Vec<StepExport>,
}

#[derive(Debug, Serialize)]
pub struct StepExport {
    pub text: String,
    pub methods: Vec<String>,
}
