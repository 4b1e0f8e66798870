//! Ingredient line parser.
//!
//! Turns one free-text ingredient line like "2 cups chopped yellow onion"
//! into a structured [`Ingredient`]. Parsing never fails fatally: a
//! malformed quantity is logged and the amount/unit assignment is skipped.

use crate::error::TransformError;
use crate::lexicon::{is_adjective, is_qualifier, Lexicon};
use crate::model::Ingredient;
use crate::vocab::{categorize, resolve_synonym};
use log::debug;

/// Parse one numeric quantity token: either a fraction like "1/2" or a
/// plain decimal
fn parse_amount(token: &str) -> Result<f64, TransformError> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: i64 = numerator
            .parse()
            .map_err(|_| TransformError::MalformedQuantity(token.to_string()))?;
        let denominator: i64 = denominator
            .parse()
            .map_err(|_| TransformError::MalformedQuantity(token.to_string()))?;
        if denominator == 0 {
            return Err(TransformError::MalformedQuantity(token.to_string()));
        }
        Ok(numerator as f64 / denominator as f64)
    } else {
        token
            .parse()
            .map_err(|_| TransformError::MalformedQuantity(token.to_string()))
    }
}

/// Drop the final character of a token, e.g. the ")" of "ounce)"
fn strip_last_char(token: &str) -> &str {
    match token.char_indices().last() {
        Some((i, _)) => &token[..i],
        None => token,
    }
}

/// Parse one ingredient line into a structured record
pub fn parse_ingredient(line: &str, lexicon: &dyn Lexicon) -> Ingredient {
    // A stylistic suffix after ", " ("..., divided") is not part of the
    // structured record
    let body = line.split(", ").next().unwrap_or(line).trim();

    // "salt to taste" style lines carry no amount, unit or adjective
    if body.contains("to taste") {
        let name = body.replace(" to taste", "");
        return Ingredient::new(name, None, None, None, None);
    }

    let mut words: Vec<&str> = body.split_whitespace().collect();
    let name = match words.pop() {
        Some(word) => word,
        None => return Ingredient::new(body, None, None, None, None),
    };

    let mut amount = None;
    let mut unit: Option<&str> = None;
    let mut idx = 0;

    // Leading digit token is the amount
    if words
        .first()
        .is_some_and(|w| w.starts_with(|c: char| c.is_ascii_digit()))
    {
        match parse_amount(words[0]) {
            Ok(value) => amount = Some(value),
            Err(err) => debug!("skipping quantity for {:?}: {}", line, err),
        }
        idx += 1;
    }

    if amount.is_some() && idx < words.len() {
        let next = words[idx];
        let mut chars = next.chars();
        if chars.next() == Some('(') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
            // Alternative-measurement annotation, e.g. "1 (14 ounce) can":
            // the parenthesised amount and unit replace the leading count
            match parse_amount(&next[1..]) {
                Ok(value) => amount = Some(value),
                Err(err) => debug!("skipping quantity for {:?}: {}", line, err),
            }
            idx += 1;
            if idx < words.len() {
                unit = Some(strip_last_char(words[idx]));
                idx += 1;
            }
        } else if !is_adjective(lexicon.pos_tags(next)) {
            unit = Some(next);
            idx += 1;
        }
    }

    // Everything between the unit and the head noun qualifies the
    // ingredient. The scan stops at the first unambiguous non-qualifier,
    // but leftover tokens are kept as qualifiers rather than reclassified.
    let mut qualifiers: Vec<&str> = Vec::new();
    let mut scan = idx;
    while scan < words.len() && is_qualifier(lexicon.pos_tags(words[scan])) {
        qualifiers.push(words[scan]);
        scan += 1;
    }
    qualifiers.extend(&words[scan..]);
    let adjective = if qualifiers.is_empty() {
        None
    } else {
        Some(qualifiers.join(" "))
    };

    let name = resolve_synonym(name);
    let category = categorize(name, adjective.as_deref());
    Ingredient::new(name, adjective.as_deref(), category, amount, unit)
}
