//! Tool and cooking-method extraction.
//!
//! Scans step text for known tool and method vocabulary (unigrams and
//! bigrams), producing a recipe-wide tool set, per-step method lists and
//! a frequency-ranked method histogram.

use crate::lexicon::Lexicon;
use crate::steps::Step;
use crate::vocab::{METHODS, TOOLS};
use log::debug;

/// Method frequency counter preserving first-seen order
#[derive(Debug, Default)]
struct MethodCounter {
    counts: Vec<(String, usize)>,
}

impl MethodCounter {
    fn record(&mut self, method: &str) {
        match self.counts.iter_mut().find(|(m, _)| m == method) {
            Some(entry) => entry.1 += 1,
            None => self.counts.push((method.to_string(), 1)),
        }
    }

    /// Highest-count method; ties break towards the first-seen entry
    fn primary(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (method, count) in &self.counts {
            let better = match best {
                Some((_, top)) => *count > top,
                None => true,
            };
            if better {
                best = Some((method, *count));
            }
        }
        best.map(|(method, _)| method)
    }
}

/// Recipe-wide results of the extraction pass
#[derive(Debug)]
pub struct MethodSummary {
    pub tools: Vec<String>,
    pub primary_method: Option<String>,
    pub other_methods: Vec<String>,
    pub bake: bool,
}

/// Scan every step, populating its `methods` list, and summarise the
/// recipe's tools and methods
pub fn extract_tools_methods(steps: &mut [Step], lexicon: &dyn Lexicon) -> MethodSummary {
    let mut tools: Vec<String> = Vec::new();
    let mut counter = MethodCounter::default();

    for step in steps.iter_mut() {
        let tokens: Vec<String> = lexicon
            .tokenize(&step.text)
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !lexicon.is_stopword(t))
            .collect();

        let mut grams: Vec<String> = tokens.clone();
        grams.extend(tokens.windows(2).map(|pair| pair.join(" ")));

        let mut step_methods: Vec<String> = Vec::new();
        for gram in &grams {
            if TOOLS.contains(&gram.as_str()) && !tools.contains(gram) {
                tools.push(gram.clone());
            }
            if METHODS.contains(&gram.as_str()) {
                counter.record(gram);
                if !step_methods.contains(gram) {
                    step_methods.push(gram.clone());
                }
            }
        }
        debug!("step methods for {:?}: {:?}", step.text, step_methods);
        step.methods = step_methods;
    }

    let primary_method = counter.primary().map(str::to_string);
    let other_methods: Vec<String> = counter
        .counts
        .iter()
        .map(|(m, _)| m.clone())
        .filter(|m| Some(m.as_str()) != primary_method.as_deref())
        .collect();
    let bake = primary_method.as_deref() == Some("bake")
        || other_methods.iter().any(|m| m == "bake");

    MethodSummary {
        tools,
        primary_method,
        other_methods,
        bake,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::StaticLexicon;

    fn step(text: &str) -> Step {
        Step::new(text.to_string(), &[])
    }

    #[test]
    fn test_methods_and_tools() {
        let mut steps = vec![
            step("1. Heat oil in a pan and fry the onion."),
            step("2. Fry the chicken until golden."),
            step("3. Simmer for ten minutes."),
        ];
        let summary = extract_tools_methods(&mut steps, &StaticLexicon);
        assert_eq!(summary.primary_method.as_deref(), Some("fry"));
        assert_eq!(summary.other_methods, vec!["heat", "simmer"]);
        assert_eq!(summary.tools, vec!["pan"]);
        assert!(!summary.bake);
        assert_eq!(steps[0].methods, vec!["heat", "fry"]);
        assert_eq!(steps[2].methods, vec!["simmer"]);
    }

    #[test]
    fn test_tie_breaks_towards_first_seen() {
        let mut steps = vec![step("1. Mix the batter."), step("2. Bake for an hour.")];
        let summary = extract_tools_methods(&mut steps, &StaticLexicon);
        assert_eq!(summary.primary_method.as_deref(), Some("mix"));
        assert_eq!(summary.other_methods, vec!["bake"]);
        assert!(summary.bake);
    }

    #[test]
    fn test_duplicates_count_once_per_step_list() {
        let mut steps = vec![step("1. Stir, then stir again and stir well.")];
        let summary = extract_tools_methods(&mut steps, &StaticLexicon);
        assert_eq!(summary.primary_method.as_deref(), Some("stir"));
        assert_eq!(steps[0].methods, vec!["stir"]);
    }

    #[test]
    fn test_no_methods_found() {
        let mut steps = vec![step("1. Leave everything alone.")];
        let summary = extract_tools_methods(&mut steps, &StaticLexicon);
        assert_eq!(summary.primary_method, None);
        assert!(summary.other_methods.is_empty());
        assert!(!summary.bake);
    }
}
