//! Step text rewriter.
//!
//! Applies the accumulated ingredient and method switches to every step's
//! text, then collapses the adjacent duplicate words that chained
//! substitutions can produce (e.g. "fish fish sauce").

use crate::lexicon::Lexicon;
use crate::model::SwitchMap;
use crate::steps::Step;

/// Boundary characters standing in for word boundaries. A key followed by
/// one of these is replaced even inside a longer word; this approximation
/// is intentional.
const WORD_ENDS: [char; 3] = [' ', '.', ','];

fn replace_bounded(text: &mut String, key: &str, value: &str) {
    for end in WORD_ENDS {
        let from = format!("{}{}", key, end);
        let to = format!("{}{}", value, end);
        *text = text.replace(&from, &to);
    }
}

fn collapse_duplicates(text: &mut String, lexicon: &dyn Lexicon) {
    let tokens: Vec<String> = lexicon
        .tokenize(text)
        .into_iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !lexicon.is_stopword(t))
        .collect();
    for pair in tokens.windows(2) {
        if pair[0] == pair[1] {
            let doubled = format!("{} {}", pair[0], pair[1]);
            *text = text.replace(&doubled, &pair[0]);
        }
    }
}

/// Rewrite every step: ingredient switches first, then method switches,
/// each in insertion order, then duplicate collapse
pub fn alter_steps(
    steps: &mut [Step],
    ingredient_switches: &SwitchMap,
    method_switches: &SwitchMap,
    lexicon: &dyn Lexicon,
) {
    for step in steps.iter_mut() {
        for (key, value) in ingredient_switches.iter() {
            replace_bounded(&mut step.text, key, value);
        }
        for (key, value) in method_switches.iter() {
            replace_bounded(&mut step.text, key, value);
        }
        collapse_duplicates(&mut step.text, lexicon);
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
    fn test_switches_respect_boundary_characters() {
        let mut steps = vec![step("1. Add the salt, then more salt.")];
        let mut switches = SwitchMap::new();
        switches.insert("salt", "himalayan salt");
        alter_steps(&mut steps, &switches, &SwitchMap::new(), &StaticLexicon);
        assert_eq!(
            steps[0].text,
            "1. Add the himalayan salt, then more himalayan salt."
        );
    }

    #[test]
    fn test_full_name_keys_run_before_bare_names() {
        let mut steps = vec![step("1. Stir in the chopped yellow onion.")];
        let mut switches = SwitchMap::new();
        switches.insert("chopped yellow onion", "chopped yellow shallot");
        switches.insert("onion", "chopped yellow shallot");
        alter_steps(&mut steps, &switches, &SwitchMap::new(), &StaticLexicon);
        assert_eq!(steps[0].text, "1. Stir in the chopped yellow shallot.");
    }

    #[test]
    fn test_method_switches_follow_ingredient_switches() {
        let mut steps = vec![step("2. Fry the chicken, then fry the onion.")];
        let mut ingredient_switches = SwitchMap::new();
        ingredient_switches.insert("chicken", "eggplant");
        let mut method_switches = SwitchMap::new();
        method_switches.insert("fry", "saute");
        alter_steps(&mut steps, &ingredient_switches, &method_switches, &StaticLexicon);
        assert_eq!(steps[0].text, "2. Fry the eggplant, then saute the onion.");
    }

    #[test]
    fn test_adjacent_duplicates_collapse() {
        let mut steps = vec![step("3. Pour in the fish fish sauce.")];
        alter_steps(&mut steps, &SwitchMap::new(), &SwitchMap::new(), &StaticLexicon);
        assert_eq!(steps[0].text, "3. Pour in the fish sauce.");
    }

    #[test]
    fn test_removal_switch_blanks_the_word() {
        let mut steps = vec![step("4. Top with zoodles and serve.")];
        let mut switches = SwitchMap::new();
        switches.insert("zoodles", "");
        alter_steps(&mut steps, &switches, &SwitchMap::new(), &StaticLexicon);
        // blanking keeps the boundary character, so the two surrounding
        // spaces both survive
        assert_eq!(steps[0].text, "4. Top with  and serve.");
    }
}
