use log::error;
use recipe_transform::{fetch_recipe, AppConfig, Profile, Recipe, SourceRecipe, StaticLexicon};
use std::io::{self, BufRead, Write};

fn prompt(message: &str) -> Result<String, io::Error> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_source(config: &AppConfig) -> Result<SourceRecipe, Box<dyn std::error::Error>> {
    loop {
        let url = prompt("Enter a recipe url: ")?;
        if !url.starts_with(&config.allowed_url_prefix) {
            println!(
                "Only urls starting with {} are supported.",
                config.allowed_url_prefix
            );
            continue;
        }
        match fetch_recipe(&url, config) {
            Ok(source) => return Ok(source),
            Err(err) => {
                error!("could not import {}: {}", url, err);
                println!("Could not read a recipe from that page, try another.");
            }
        }
    }
}

fn read_profile() -> Result<Profile, io::Error> {
    loop {
        let answer = prompt(
            "How would you like to transform the recipe \
             (healthy, unhealthy, vegetarian, meatify, thai, mediterranean)? ",
        )?;
        match answer.parse::<Profile>() {
            Ok(profile) => return Ok(profile),
            Err(err) => println!("{}", err),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = AppConfig::load()?;

    let source = read_source(&config)?;
    let mut recipe = Recipe::new(source, &StaticLexicon);

    println!("\nOriginal recipe:\n");
    println!("{}", recipe);

    let profile = read_profile()?;
    recipe.transform(profile, &StaticLexicon)?;

    println!("\nTransformed recipe:\n");
    println!("{}", recipe);

    println!("{}", serde_json::to_string_pretty(&recipe.export())?);
    Ok(())
}
