//! Recipe steps and step/ingredient association.

use crate::model::IngredientHandle;

/// One instruction step. `ingredients` holds handles shared with the
/// recipe's ingredient list; `methods` is filled in by the method
/// extractor after all steps exist.
#[derive(Debug, Clone)]
pub struct Step {
    pub text: String,
    pub ingredients: Vec<IngredientHandle>,
    pub methods: Vec<String>,
}

impl Step {
    /// Build a step and attach every candidate ingredient whose lookup key
    /// occurs in the step text.
    ///
    /// Ingredients sharing a core name are disambiguated by prefixing the
    /// adjective; an adjective-less ingredient keeps the bare name, so at
    /// most one adjective-less ingredient per shared name survives.
    /// Containment is a case-insensitive substring test by design; partial
    /// or incidental matches count as matches.
    pub fn new(text: String, candidates: &[IngredientHandle]) -> Self {
        let mut groups: Vec<(String, Vec<IngredientHandle>)> = Vec::new();
        for handle in candidates {
            let name = handle.borrow().name.clone();
            match groups.iter_mut().find(|(n, _)| *n == name) {
                Some(group) => group.1.push(handle.clone()),
                None => groups.push((name, vec![handle.clone()])),
            }
        }

        let mut keyed: Vec<(String, IngredientHandle)> = Vec::new();
        for (name, members) in groups {
            if let [only] = members.as_slice() {
                upsert(&mut keyed, name, only.clone());
            } else {
                for handle in members {
                    let key = match &handle.borrow().adjective {
                        Some(adj) if !adj.is_empty() => format!("{} {}", adj, name),
                        _ => name.clone(),
                    };
                    upsert(&mut keyed, key, handle.clone());
                }
            }
        }

        let haystack = text.to_lowercase();
        let ingredients = keyed
            .into_iter()
            .filter(|(key, _)| haystack.contains(&key.to_lowercase()))
            .map(|(_, handle)| handle)
            .collect();

        Self {
            text,
            ingredients,
            methods: Vec::new(),
        }
    }
}

fn upsert(keyed: &mut Vec<(String, IngredientHandle)>, key: String, handle: IngredientHandle) {
    match keyed.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = handle,
        None => keyed.push((key, handle)),
    }
}
