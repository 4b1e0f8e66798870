use recipe_transform::{Profile, Recipe, SourceRecipe, StaticLexicon};

fn build_recipe(ingredients: &[&str], steps: &[&str]) -> Recipe {
    let source = SourceRecipe {
        name: "Test Recipe".to_string(),
        ingredient_lines: ingredients.iter().map(|s| s.to_string()).collect(),
        step_lines: steps.iter().map(|s| s.to_string()).collect(),
    };
    Recipe::new(source, &StaticLexicon)
}

#[test]
fn test_healthy_replaces_butter_with_olive_oil() {
    let mut recipe = build_recipe(
        &["1 cup butter", "2 cups rice"],
        &[
            "Melt the butter in a pan.",
            "Boil the rice.",
            "Mix the rice and butter.",
        ],
    );

    recipe.transform(Profile::Healthy, &StaticLexicon).unwrap();

    let names: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|h| h.borrow().full_name())
        .collect();
    assert!(names.contains(&"olive oil".to_string()));
    assert!(names.contains(&"quinoa".to_string()));
    assert!(!names.iter().any(|n| n.contains("butter")));

    // the addition keeps the replaced ingredient's amount and unit
    let oil = recipe
        .ingredients
        .iter()
        .find(|h| h.borrow().name == "oil")
        .unwrap()
        .borrow()
        .clone();
    assert_eq!(oil.amount, Some(1.0));
    assert_eq!(oil.unit.as_deref(), Some("cup"));

    assert_eq!(recipe.steps[1].text, "2. Boil the quinoa.");
    for step in &recipe.steps {
        assert!(!step.text.contains("butter"));
    }
}

#[test]
fn test_unhealthy_appends_one_ingredient_and_one_step() {
    let mut recipe = build_recipe(
        &["1 cup croutons"],
        &["Toast the croutons.", "Serve in a bowl."],
    );
    assert!(!recipe.bake);

    recipe.transform(Profile::Unhealthy, &StaticLexicon).unwrap();

    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.steps.len(), 3);
    assert_eq!(
        recipe.steps[2].text,
        "3. Sprinkle a lot of extra salt over the whole meal."
    );
    assert_eq!(recipe.ingredients[1].borrow().name, "salt");
}

#[test]
fn test_vegetarian_meat_word_follows_the_substitute() {
    let mut recipe = build_recipe(
        &["1 pound chicken breasts", "1 cup rice"],
        &["Grill the chicken breasts.", "Serve over rice with the meat."],
    );

    recipe
        .transform(Profile::Vegetarian, &StaticLexicon)
        .unwrap();

    let eggplant = recipe.ingredients[0].borrow();
    assert_eq!(eggplant.name, "eggplant");
    assert_eq!(eggplant.adjective, None);
    assert_eq!(eggplant.category.as_deref(), Some("vegetable"));
    drop(eggplant);

    assert_eq!(recipe.steps[0].text, "1. Grill the eggplant.");
    // the generic word "meat" tracks the replacement
    assert_eq!(recipe.steps[1].text, "2. Serve over rice with the eggplant.");
}

#[test]
fn test_vegetarian_turns_meat_broth_into_vegetable_broth() {
    let mut recipe = build_recipe(
        &["4 cups chicken broth"],
        &["Pour in the chicken broth and simmer."],
    );

    recipe
        .transform(Profile::Vegetarian, &StaticLexicon)
        .unwrap();

    let broth = recipe.ingredients[0].borrow();
    assert_eq!(broth.full_name(), "vegetable broth");
    assert_eq!(broth.category.as_deref(), Some("broth"));
    drop(broth);
    assert_eq!(
        recipe.steps[0].text,
        "1. Pour in the vegetable broth and simmer."
    );
}

#[test]
fn test_meatify_reverses_a_vegetarian_staple() {
    let mut recipe = build_recipe(&["2 cups lentils"], &["Simmer the lentils."]);

    recipe.transform(Profile::Meatify, &StaticLexicon).unwrap();

    let beef = recipe.ingredients[0].borrow();
    assert_eq!(beef.name, "beef");
    assert_eq!(beef.category.as_deref(), Some("meat"));
    drop(beef);
    assert_eq!(recipe.steps[0].text, "1. Simmer the beef.");
}

#[test]
fn test_thai_exception_beats_the_name_rule() {
    let mut recipe = build_recipe(
        &["1 large onion", "2 cups milk"],
        &["Chop the onion.", "Pour in the milk and simmer."],
    );

    recipe.transform(Profile::Thai, &StaticLexicon).unwrap();

    // "large onion" hits the exception (shallots), not the plain
    // onion-to-shallot name rule
    let shallots = recipe.ingredients[0].borrow();
    assert_eq!(shallots.name, "shallots");
    drop(shallots);
    let milk = recipe.ingredients[1].borrow();
    assert_eq!(milk.adjective.as_deref(), Some("coconut"));
    drop(milk);

    assert_eq!(recipe.steps[0].text, "1. Chop the large shallots.");
    assert_eq!(recipe.steps[1].text, "2. Pour in the coconut milk and simmer.");
}

#[test]
fn test_mediterranean_swaps_unhealthy_dairy() {
    let mut recipe = build_recipe(&["1 cup whole milk"], &["Heat the milk."]);

    recipe
        .transform(Profile::Mediterranean, &StaticLexicon)
        .unwrap();

    let yogurt = recipe.ingredients[0].borrow();
    assert_eq!(yogurt.name, "yogurt");
    assert_eq!(yogurt.adjective.as_deref(), Some("greek"));
    assert_eq!(yogurt.category.as_deref(), Some("healthy_dairy"));
    drop(yogurt);
    assert_eq!(recipe.steps[0].text, "1. Heat the greek yogurt.");
}

#[test]
fn test_unhealthy_baking_keeps_baking_and_frosts_the_result() {
    let mut recipe = build_recipe(
        &["2 cups flour", "1 cup sugar"],
        &[
            "Mix the flour and sugar.",
            "Bake for 30 minutes.",
            "Bake until golden, then cool.",
        ],
    );
    assert!(recipe.bake);
    assert_eq!(recipe.primary_method.as_deref(), Some("bake"));

    recipe.transform(Profile::Unhealthy, &StaticLexicon).unwrap();

    // baking steps stay baking steps
    assert!(recipe.steps[1].text.contains("Bake"));
    assert_eq!(recipe.steps[3].text, "4. Spread frosting over everything.");
    let frosting = recipe.ingredients.last().unwrap().borrow();
    assert_eq!(frosting.name, "frosting");
    assert_eq!(frosting.adjective.as_deref(), Some("chocolate"));
    assert_eq!(frosting.amount, Some(2.0));
}
