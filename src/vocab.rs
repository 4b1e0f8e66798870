//! Static cooking vocabulary: method and tool word lists, the ingredient
//! synonym table and the food-category membership tables.

/// Cooking method vocabulary matched against step unigrams and bigrams
pub const METHODS: &[&str] = &[
    "blend", "cut", "strain", "roast", "slice", "flip", "baste", "simmer",
    "grate", "drain", "saute", "broil", "boil", "poach", "bake", "grill",
    "fry", "heat", "mix", "chop", "stir", "shake", "mince", "crush",
    "squeeze", "dice", "rub", "cook",
];

/// Kitchen tool vocabulary matched against step unigrams and bigrams
pub const TOOLS: &[&str] = &[
    "pan", "grater", "whisk", "pot", "spatula", "tong", "oven", "knife",
];

/// Exact-match name synonyms applied during parsing and to raw step text
pub const SYNONYMS: &[(&str, &str)] = &[
    ("stock", "broth"),
    ("cayenne", "cayenne pepper"),
];

/// Meat vocabulary; matched by substring containment against the full
/// ingredient name, first entry wins
pub const MEAT: &[&str] = &[
    "scallop", "sausage", "bacon", "beef", "pork", "lamb", "crab", "fish",
    "chicken", "turkey", "liver", "duck", "tuna", "lobster", "salmon",
    "shrimp", "crayfish", "crawfish", "ribs", "pheasant", "escargot",
    "snail", "bass", "sturgeon", "trout", "flounder", "carp", "quail",
    "goose",
];

/// Food-category membership tables, in declaration order. Exact membership
/// of the full name or the bare name; the first matching table wins.
pub const INGREDIENT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "healthy_fats",
        &["olive oil", "sunflower oil", "soybean oil", "corn oil", "sesame oil", "peanut oil"],
    ),
    (
        "unhealthy_fats",
        &[
            "butter", "lard", "shortening", "canola oil", "margarine", "coconut oil", "tallow",
            "cream", "milk fat", "palm oil", "palm kernel oil", "chicken fat", "hydrogenated oils",
        ],
    ),
    (
        "healthy_protein",
        &["peas", "beans", "eggs", "crab", "fish", "chicken", "tofu", "liver", "turkey"],
    ),
    ("unhealthy_protein", &["ground beef", "beef", "pork", "lamb"]),
    ("meat", MEAT),
    (
        "healthy_dairy",
        &["fat free milk", "low fat milk", "yogurt", "low fat cheese"],
    ),
    (
        "unhealthy_dairy",
        &[
            "reduced-fat milk", "cream cheese", "whole milk", "butter", "cheese",
            "whipped cream", "sour cream",
        ],
    ),
    (
        "healthy_salts",
        &["low sodium soy sauce", "sea salt", "kosher salt"],
    ),
    ("unhealthy_salts", &["soy sauce", "table salt", "salt"]),
    (
        "healthy_grains",
        &[
            "oat cereal", "wild rice", "oatmeal", "whole rye", "buckwheat", "rolled oats",
            "quinoa", "bulgur", "millet", "brown rice", "whole wheat pasta",
        ],
    ),
    (
        "unhealthy_grains",
        &["macaroni", "noodles", "spaghetti", "white rice", "white bread", "regular white pasta"],
    ),
    (
        "healthy_sugars",
        &[
            "real fruit jam", "fruit juice concentrates", "monk fruit extract", "cane sugar",
            "molasses", "brown rice syrup", "stevia", "honey", "maple syrup", "agave syrup",
            "coconut sugar", "date sugar", "sugar alcohols", "brown sugar",
        ],
    ),
    (
        "unhealthy_sugars",
        &["aspartame", "acesulfame K", "sucralose", "white sugar", "corn syrup", "chocolate syrup"],
    ),
    (
        "spice",
        &[
            "ajwain", "allspice", "almond meal", "anise seed", "annatto seed", "arrowroot powder",
            "cacao", "cumin", "bell pepper", "beetroot powder", "chia seeds", "cloves", "chiles",
            "cinnamon", "coriander", "dill seed", "garlic", "ginger", "mustard", "onion",
            "paprika", "cayenne", "pepper", "red pepper", "black pepper", "shallots",
            "star anise", "turmeric", "vanilla extract",
        ],
    ),
    (
        "herb",
        &[
            "basil", "bay leaves", "celery flakes", "chervil", "cilantro", "curry", "dill weed",
            "dried chives", "epatoze", "file powder", "kaffire lime", "lavender", "lemongrass",
            "mint", "oregano", "parsley", "rosemary", "sage", "tarragon", "thyme",
        ],
    ),
];

/// Resolve a name through the synonym table
pub fn resolve_synonym(name: &str) -> &str {
    SYNONYMS
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Classify an ingredient by its full name.
///
/// Meats are matched first by substring containment and the category is
/// the meat word itself; every other table is checked by exact membership
/// of the full name or the bare name, first table wins.
pub fn categorize(name: &str, adjective: Option<&str>) -> Option<&'static str> {
    let full_name = match adjective {
        Some(adj) => format!("{} {}", adj, name),
        None => name.to_string(),
    };
    for meat in MEAT {
        if full_name.contains(meat) {
            return Some(meat);
        }
    }
    for (category, members) in INGREDIENT_CATEGORIES {
        if members.contains(&full_name.as_str()) || members.contains(&name) {
            return Some(category);
        }
    }
    None
}
