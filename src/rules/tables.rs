//! Rule tables for the six transformation profiles.
//!
//! Each builder returns a fresh immutable [`RuleSet`]. `healthy` and
//! `unhealthy` have separate tables for baking recipes.

use super::Action::{Recategorize, Rename, Requalify, Rescale, Reunit};
use super::{Addition, Rule, RuleSet};
use std::collections::HashMap;

fn table(entries: Vec<(&'static str, Rule)>) -> HashMap<&'static str, Rule> {
    entries.into_iter().collect()
}

fn methods(entries: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    entries.iter().copied().collect()
}

fn applesauce_for_fat() -> Addition {
    Addition::Derived {
        name: "applesauce",
        adjective: Some("unsweetened"),
        category: Some("sauce"),
        factor: 1.0,
    }
}

pub fn healthy() -> RuleSet {
    RuleSet {
        names: table(vec![
            (
                "shortening",
                Rule::substitute(&[Rescale(0.5)])
                    .add(applesauce_for_fat())
                    .removing(),
            ),
            ("oil", Rule::substitute(&[Requalify(Some("olive"))])),
            (
                "butter",
                Rule::substitute(&[Rescale(0.5)])
                    .add(Addition::Derived {
                        name: "oil",
                        adjective: Some("olive"),
                        category: Some("oil"),
                        factor: 1.0,
                    })
                    .removing(),
            ),
            ("sugar", Rule::substitute(&[Rename("stevia")])),
            ("salt", Rule::substitute(&[Requalify(Some("himalayan"))])),
            ("pasta", Rule::substitute(&[Requalify(Some("whole-wheat"))])),
            ("milk", Rule::substitute(&[Requalify(Some("almond"))])),
            ("cheese", Rule::substitute(&[Rescale(0.5)])),
            ("jelly", Rule::default().add(Addition::Base).removing()),
            (
                "egg",
                Rule::substitute(&[Requalify(Some("substitute")), Rescale(0.25), Reunit("cup")]),
            ),
            ("rice", Rule::substitute(&[Rename("quinoa")])),
            ("flour", Rule::substitute(&[Requalify(Some("whole-wheat"))])),
            (
                "chocolate",
                Rule::substitute(&[Rename("nibs"), Requalify(Some("cocoa"))]),
            ),
            ("beef", Rule::substitute(&[Rename("chicken")])),
            ("steak", Rule::substitute(&[Rename("chicken")])),
            ("bacon", Rule::substitute(&[Requalify(Some("turkey"))])),
        ]),
        adjectives: table(vec![
            ("iceberg", Rule::substitute(&[Requalify(Some("romaine"))])),
            ("peanut", Rule::substitute(&[Requalify(Some("almond"))])),
        ]),
        categories: table(vec![
            ("topping", Rule::default().removing()),
            ("condiment", Rule::default().removing()),
            ("vegetable", Rule::substitute(&[Rescale(2.0)])),
        ]),
        exceptions: table(vec![
            ("peanut butter", Rule::substitute(&[Requalify(Some("almond"))])),
            (
                "sour cream",
                Rule::substitute(&[Rename("yogurt"), Requalify(Some("greek"))]),
            ),
        ]),
        methods: methods(&[("fry", "saute")]),
    }
}

pub fn healthy_baking() -> RuleSet {
    RuleSet {
        names: table(vec![
            (
                "shortening",
                Rule::substitute(&[Rescale(0.5)])
                    .add(applesauce_for_fat())
                    .removing(),
            ),
            (
                "oil",
                Rule::substitute(&[Rescale(0.5)])
                    .add(applesauce_for_fat())
                    .removing(),
            ),
            (
                "butter",
                Rule::substitute(&[Rescale(0.5)])
                    .add(applesauce_for_fat())
                    .removing(),
            ),
            ("sugar", Rule::substitute(&[Rename("stevia")])),
            ("salt", Rule::substitute(&[Requalify(Some("himalayan"))])),
            ("milk", Rule::substitute(&[Requalify(Some("almond"))])),
            ("cheese", Rule::substitute(&[Rescale(0.5)])),
            ("jelly", Rule::default().add(Addition::Base).removing()),
            (
                "egg",
                Rule::substitute(&[Requalify(Some("substitute")), Rescale(0.25), Reunit("cup")]),
            ),
            ("flour", Rule::substitute(&[Requalify(Some("whole-wheat"))])),
            (
                "chocolate",
                Rule::substitute(&[Rename("nibs"), Requalify(Some("cacao"))]),
            ),
            ("beef", Rule::substitute(&[Rename("chicken")])),
            ("steak", Rule::substitute(&[Rename("chicken")])),
            ("bacon", Rule::substitute(&[Requalify(Some("turkey"))])),
        ]),
        adjectives: table(vec![(
            "peanut",
            Rule::substitute(&[Requalify(Some("almond"))]),
        )]),
        categories: table(vec![("topping", Rule::default().removing())]),
        exceptions: table(vec![(
            "peanut butter",
            Rule::substitute(&[Requalify(Some("almond"))]),
        )]),
        methods: methods(&[("fry", "bake")]),
    }
}

fn unhealthy_names() -> Vec<(&'static str, Rule)> {
    vec![
        (
            "applesauce",
            Rule::substitute(&[Rescale(3.0)])
                .add(Addition::Derived {
                    name: "shortening",
                    adjective: None,
                    category: None,
                    factor: 1.0,
                })
                .removing(),
        ),
        (
            "oil",
            Rule::substitute(&[Rescale(3.0)])
                .add(Addition::Derived {
                    name: "butter",
                    adjective: None,
                    category: None,
                    factor: 1.0,
                })
                .removing(),
        ),
        ("stevia", Rule::substitute(&[Rename("sugar"), Rescale(2.0)])),
        (
            "salt",
            Rule::substitute(&[Requalify(Some("table")), Rescale(2.0)]),
        ),
        ("pasta", Rule::substitute(&[Requalify(None)])),
        ("milk", Rule::substitute(&[Requalify(Some("whole"))])),
        ("cheese", Rule::substitute(&[Rescale(2.0)])),
        (
            "quinoa",
            Rule::substitute(&[Rename("rice"), Requalify(Some("white"))]),
        ),
        ("flour", Rule::substitute(&[Requalify(None)])),
        (
            "cacao",
            Rule::substitute(&[Rename("chocolate"), Requalify(None)]),
        ),
        (
            "zoodles",
            Rule::default()
                .add(Addition::Derived {
                    name: "pasta",
                    adjective: None,
                    category: None,
                    factor: 1.0,
                })
                .removing(),
        ),
        (
            "flaxseed",
            Rule::default()
                .add(Addition::Derived {
                    name: "crumbs",
                    adjective: Some("bread"),
                    category: None,
                    factor: 1.0,
                })
                .removing(),
        ),
        ("chicken", Rule::substitute(&[Rename("beef")])),
    ]
}

fn unhealthy_adjectives() -> Vec<(&'static str, Rule)> {
    vec![
        ("romaine", Rule::substitute(&[Requalify(Some("iceberg"))])),
        ("almond", Rule::substitute(&[Requalify(Some("peanut"))])),
        ("corn", Rule::substitute(&[Requalify(Some("flour"))])),
        ("fresh", Rule::substitute(&[Requalify(Some("canned"))])),
    ]
}

pub fn unhealthy() -> RuleSet {
    let mut names = unhealthy_names();
    names.push((
        "eggs",
        Rule::substitute(&[Requalify(None), Rescale(1.0), Reunit("egg")]),
    ));
    RuleSet {
        names: table(names),
        adjectives: table(unhealthy_adjectives()),
        categories: table(vec![("vegetable", Rule::default().removing())]),
        exceptions: table(vec![(
            "greek yogurt",
            Rule::substitute(&[Rename("sour"), Requalify(Some("cream"))]),
        )]),
        methods: methods(&[
            ("saute", "fry"),
            ("sauté", "fry"),
            ("steam", "fry"),
            ("grill", "fry"),
            ("roast", "fry"),
            ("bake", "fry"),
            ("cook", "fry"),
        ]),
    }
}

pub fn unhealthy_baking() -> RuleSet {
    let mut names = unhealthy_names();
    names.push((
        "egg",
        Rule::substitute(&[Requalify(None), Rescale(1.0), Reunit("egg")]),
    ));
    RuleSet {
        names: table(names),
        adjectives: table(unhealthy_adjectives()),
        categories: table(vec![("vegetable", Rule::default().removing())]),
        exceptions: table(vec![(
            "greek yogurt",
            Rule::substitute(&[Rename("sour"), Requalify(Some("cream"))]),
        )]),
        // a baking recipe keeps baking; everything else turns into frying
        methods: methods(&[
            ("saute", "fry"),
            ("sauté", "fry"),
            ("steam", "fry"),
            ("grill", "fry"),
            ("roast", "fry"),
            ("cook", "fry"),
        ]),
    }
}

/// Meat-category replacements keyed by the meat word the classifier
/// assigned as the category
fn vegetarian_meat_rule(
    name: &'static str,
    adjective: Option<&'static str>,
    category: &'static str,
) -> Rule {
    Rule::substitute(&[Rename(name), Requalify(adjective), Recategorize(Some(category))])
}

pub fn vegetarian() -> RuleSet {
    RuleSet {
        names: table(vec![(
            "broth",
            Rule::substitute(&[Requalify(Some("vegetable")), Recategorize(Some("broth"))]),
        )]),
        adjectives: HashMap::new(),
        categories: table(vec![
            ("chicken", vegetarian_meat_rule("eggplant", None, "vegetable")),
            ("pork", vegetarian_meat_rule("tofu", None, "curd")),
            ("beef", vegetarian_meat_rule("lentils", None, "vegetable")),
            ("sausage", vegetarian_meat_rule("seitan", None, "vegetable")),
            ("steak", vegetarian_meat_rule("mushroom", Some("portobello"), "vegetable")),
            ("bacon", vegetarian_meat_rule("seitan", None, "vegetable")),
            ("fish", vegetarian_meat_rule("tofu", None, "curd")),
            ("crawfish", vegetarian_meat_rule("tofu", None, "curd")),
            ("crayfish", vegetarian_meat_rule("tofu", None, "curd")),
            ("tuna", vegetarian_meat_rule("tofuna", None, "curd")),
            ("trout", vegetarian_meat_rule("tempeh", None, "vegetable")),
            ("carp", vegetarian_meat_rule("tempeh", None, "vegetable")),
            ("flounder", vegetarian_meat_rule("tofu", None, "curd")),
            ("bass", vegetarian_meat_rule("tofu", None, "curd")),
            ("sturgeon", vegetarian_meat_rule("tofu", None, "curd")),
            ("shrimp", vegetarian_meat_rule("shrimp", Some("vegan"), "curd")),
            ("salmon", vegetarian_meat_rule("salmon", Some("vegan"), "vegetable")),
            ("lobster", vegetarian_meat_rule("lobster", Some("vegan"), "curd")),
            ("scallop", vegetarian_meat_rule("tofu", None, "curd")),
            ("lamb", vegetarian_meat_rule("seitan", None, "vegetable")),
            ("crab", vegetarian_meat_rule("crab", Some("vegan"), "vegetable")),
            ("turkey", vegetarian_meat_rule("tofurkey", None, "curd")),
            ("duck", vegetarian_meat_rule("duck", Some("mock"), "vegetable")),
            ("liver", vegetarian_meat_rule("liver", Some("mock"), "vegetable")),
            ("ribs", vegetarian_meat_rule("seitan", None, "vegetable")),
            ("pheasant", vegetarian_meat_rule("eggplant", None, "vegetable")),
            ("quail", vegetarian_meat_rule("eggplant", None, "vegetable")),
            ("goose", vegetarian_meat_rule("eggplant", None, "vegetable")),
            ("escargot", vegetarian_meat_rule("tofu", None, "curd")),
            ("snail", vegetarian_meat_rule("tofu", None, "curd")),
        ]),
        exceptions: HashMap::new(),
        methods: HashMap::new(),
    }
}

pub fn meatify() -> RuleSet {
    RuleSet {
        names: table(vec![
            (
                "eggplant",
                Rule::substitute(&[
                    Rename("chicken"),
                    Requalify(Some("fried")),
                    Recategorize(Some("meat")),
                ]),
            ),
            (
                "tofu",
                Rule::substitute(&[Rename("pork"), Recategorize(Some("meat"))]),
            ),
            (
                "lentils",
                Rule::substitute(&[Rename("beef"), Recategorize(Some("meat"))]),
            ),
            (
                "mushroom",
                Rule::substitute(&[Rename("steak"), Requalify(None), Recategorize(Some("meat"))]),
            ),
            (
                "seitan",
                Rule::substitute(&[Rename("bacon"), Recategorize(Some("meat"))]),
            ),
            (
                "tempeh",
                Rule::substitute(&[Rename("fish"), Recategorize(Some("meat"))]),
            ),
        ]),
        adjectives: HashMap::new(),
        categories: HashMap::new(),
        exceptions: HashMap::new(),
        methods: HashMap::new(),
    }
}

pub fn thai() -> RuleSet {
    RuleSet {
        names: table(vec![
            (
                "salt",
                Rule::substitute(&[
                    Rename("fish sauce"),
                    Requalify(Some("thai")),
                    Rescale(1.0),
                    Reunit("tablespoon"),
                ]),
            ),
            ("broccoli", Rule::substitute(&[Requalify(Some("chinese"))])),
            (
                "pasta",
                Rule::substitute(&[Requalify(Some("rice")), Rename("noodles")]),
            ),
            ("noodles", Rule::substitute(&[Requalify(Some("rice"))])),
            ("milk", Rule::substitute(&[Requalify(Some("coconut"))])),
            (
                "cream",
                Rule::substitute(&[Requalify(Some("coconut")), Rename("milk")]),
            ),
            ("onions", Rule::substitute(&[Rename("shallots")])),
            ("onion", Rule::substitute(&[Rename("shallot")])),
            ("basil", Rule::substitute(&[Requalify(Some("thai"))])),
            ("sugar", Rule::substitute(&[Requalify(Some("palm"))])),
            (
                "apple",
                Rule::substitute(&[Rename("mango"), Requalify(Some("green"))]),
            ),
            (
                "turnip",
                Rule::substitute(&[Rename("radish"), Requalify(Some("white"))]),
            ),
        ]),
        adjectives: table(vec![(
            "whole-wheat",
            Rule::substitute(&[Requalify(Some("rice"))]),
        )]),
        categories: table(vec![(
            "pepper",
            Rule::substitute(&[Requalify(Some("chili"))]),
        )]),
        exceptions: table(vec![
            (
                "soy sauce",
                Rule::substitute(&[Rename("fish sauce"), Requalify(Some("thai"))]),
            ),
            (
                "lemon zest",
                Rule::substitute(&[Rename("lemongrass"), Requalify(None), Recategorize(Some("herb"))]),
            ),
            ("large onion", Rule::substitute(&[Rename("shallots")])),
        ]),
        methods: HashMap::new(),
    }
}

pub fn mediterranean() -> RuleSet {
    RuleSet {
        names: table(vec![
            (
                "broth",
                Rule::substitute(&[Requalify(Some("vegetable")), Recategorize(Some("broth"))]),
            ),
            (
                "tofu",
                Rule::substitute(&[Rename("fish"), Recategorize(Some("meat"))]),
            ),
            (
                "butter",
                Rule::substitute(&[Rename("olive oil"), Recategorize(Some("healthy_fats"))]),
            ),
            ("soybean oil", Rule::substitute(&[Rename("sesame oil")])),
            ("corn oil", Rule::substitute(&[Rename("olive oil")])),
            ("vegetable oil", Rule::substitute(&[Rename("olive oil")])),
            ("cottonseed oil", Rule::substitute(&[Rename("flaxseed oil")])),
            ("bread", Rule::substitute(&[Rename("pita")])),
            (
                "jelly",
                Rule::substitute(&[Rename("berries"), Requalify(Some("fresh"))]),
            ),
            (
                "rice",
                Rule::substitute(&[Requalify(Some("wild")), Recategorize(Some("healthy_grains"))]),
            ),
            (
                "pasta",
                Rule::substitute(&[
                    Requalify(Some("whole-wheat")),
                    Recategorize(Some("healthy_grains")),
                ]),
            ),
            ("flour", Rule::substitute(&[Requalify(Some("whole-wheat"))])),
        ]),
        adjectives: HashMap::new(),
        categories: table(vec![
            (
                "unhealthy_fats",
                Rule::substitute(&[Rename("olive oil"), Recategorize(Some("healthy_fats"))]),
            ),
            (
                "unhealthy_dairy",
                Rule::substitute(&[
                    Rename("yogurt"),
                    Requalify(Some("greek")),
                    Recategorize(Some("healthy_dairy")),
                ]),
            ),
            (
                "beef",
                Rule::substitute(&[Rename("salmon"), Requalify(Some("fillet"))]),
            ),
            (
                "chicken",
                Rule::substitute(&[Rename("tuna"), Requalify(Some("fillet"))]),
            ),
            (
                "turkey",
                Rule::substitute(&[Rename("beans"), Requalify(None)]),
            ),
            (
                "pork",
                Rule::substitute(&[Rename("trout"), Requalify(Some("fillet"))]),
            ),
            (
                "bacon",
                Rule::substitute(&[Rename("salmon"), Requalify(None)]),
            ),
            ("sausage", Rule::substitute(&[Rename("lentils")])),
        ]),
        exceptions: HashMap::new(),
        methods: HashMap::new(),
    }
}
