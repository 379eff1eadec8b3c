//! # Prompt Construction Module
//!
//! Builds the natural-language instruction prompt sent to the text model.
//! Each prompt embeds randomly chosen style facets (cuisine, cooking
//! method, dish type, spice level), a per-request identifier and the user's
//! raw ingredient text, and asks for a single JSON object in a documented
//! schema.

use rand::Rng;

/// Cuisine styles the generator can ask for
pub const CUISINE_STYLES: [&str; 15] = [
    "Italian",
    "Asian",
    "Mediterranean",
    "Mexican",
    "Indian",
    "French",
    "American",
    "Thai",
    "Middle Eastern",
    "Japanese",
    "Korean",
    "Vietnamese",
    "Greek",
    "Spanish",
    "Moroccan",
];

/// Cooking methods the generator can ask for
pub const COOKING_METHODS: [&str; 12] = [
    "stir-fry",
    "roasted",
    "grilled",
    "braised",
    "sautéed",
    "baked",
    "steamed",
    "pan-seared",
    "slow-cooked",
    "air-fried",
    "poached",
    "smoked",
];

/// Dish types the generator can ask for
pub const DISH_TYPES: [&str; 12] = [
    "pasta",
    "curry",
    "soup",
    "salad",
    "casserole",
    "stew",
    "risotto",
    "noodles",
    "rice bowl",
    "sandwich",
    "wrap",
    "pizza",
];

/// Spice levels the generator can ask for
pub const SPICE_LEVELS: [&str; 3] = ["mild", "medium", "spicy"];

/// Randomly chosen style facets for one generation request
///
/// Facets are picked from an unseeded random source in production; they
/// are never derived from previous recipes, so prompt-level uniqueness
/// claims are aspirational rather than enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptStyle {
    /// Cuisine style (e.g. "Thai")
    pub cuisine: &'static str,
    /// Cooking method (e.g. "stir-fry")
    pub method: &'static str,
    /// Dish type (e.g. "noodles")
    pub dish: &'static str,
    /// Spice level (e.g. "medium")
    pub spice_level: &'static str,
    /// "fusion" or "traditional"
    pub creativity: &'static str,
    /// Free-floating 0..100 value echoed into the prompt
    pub creativity_factor: u32,
}

impl PromptStyle {
    /// Pick a random style from the fixed facet lists
    ///
    /// The randomness source is a parameter so callers can pass a seeded
    /// generator and get a reproducible facet sequence.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cuisine: CUISINE_STYLES[rng.gen_range(0..CUISINE_STYLES.len())],
            method: COOKING_METHODS[rng.gen_range(0..COOKING_METHODS.len())],
            dish: DISH_TYPES[rng.gen_range(0..DISH_TYPES.len())],
            spice_level: SPICE_LEVELS[rng.gen_range(0..SPICE_LEVELS.len())],
            creativity: if rng.gen_bool(0.5) {
                "fusion"
            } else {
                "traditional"
            },
            creativity_factor: rng.gen_range(0..100),
        }
    }
}

/// Build the full instruction prompt for one generation request
///
/// The user's ingredient text is repeated verbatim; the request id makes
/// each prompt textually unique even for identical ingredients and style.
pub fn build_prompt(ingredient_text: &str, style: &PromptStyle, request_id: &str) -> String {
    format!(
        r#"Create a completely unique and creative {creativity} {cuisine} style {method} {dish} recipe using these ingredients: {ingredients}

Recipe Generation ID: {request_id}
Style: {creativity} {cuisine} cuisine
Method: {method} cooking technique
Dish Type: {dish}
Spice Level: {spice}
Creativity Factor: {factor}

IMPORTANT: This must be a COMPLETELY DIFFERENT recipe from any previously generated. Be highly creative and innovative.

Please respond with a JSON object in this exact format:
{{
  "title": "Creative and Unique Recipe Name",
  "ingredients": ["ingredient 1 with measurements", "ingredient 2 with measurements", "ingredient 3 with measurements"],
  "description": "Appetizing description highlighting unique flavors, textures, and cooking techniques",
  "instructions": ["Detailed step 1", "Detailed step 2", "Detailed step 3"],
  "cookingTime": "X minutes",
  "servings": X
}}

Requirements:
- Create a COMPLETELY UNIQUE recipe that hasn't been generated before
- Use {creativity} {cuisine} cooking techniques and flavor profiles
- Apply {method} cooking method creatively
- Make it {spice} in heat level
- Use as many provided ingredients as possible
- Add complementary ingredients for enhanced flavor
- Be extremely creative and innovative
- Include specific measurements in ingredients
- Provide detailed, clear cooking instructions
- Make it sound absolutely delicious and appealing
- Ensure the recipe is practical and cookable
- Respond ONLY with valid JSON, no additional text"#,
        creativity = style.creativity,
        cuisine = style.cuisine,
        method = style.method,
        dish = style.dish,
        spice = style.spice_level,
        factor = style.creativity_factor,
        ingredients = ingredient_text,
        request_id = request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_is_deterministic_for_a_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(PromptStyle::pick(&mut first), PromptStyle::pick(&mut second));
    }

    #[test]
    fn test_pick_draws_from_the_fixed_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let style = PromptStyle::pick(&mut rng);
            assert!(CUISINE_STYLES.contains(&style.cuisine));
            assert!(COOKING_METHODS.contains(&style.method));
            assert!(DISH_TYPES.contains(&style.dish));
            assert!(SPICE_LEVELS.contains(&style.spice_level));
            assert!(style.creativity == "fusion" || style.creativity == "traditional");
            assert!(style.creativity_factor < 100);
        }
    }

    #[test]
    fn test_prompt_embeds_ingredients_and_facets() {
        let style = PromptStyle {
            cuisine: "Italian",
            method: "roasted",
            dish: "pasta",
            spice_level: "mild",
            creativity: "fusion",
            creativity_factor: 33,
        };
        let prompt = build_prompt("chicken, soy sauce", &style, "12345.678");

        assert!(prompt.contains("using these ingredients: chicken, soy sauce"));
        assert!(prompt.contains("Recipe Generation ID: 12345.678"));
        assert!(prompt.contains("Style: fusion Italian cuisine"));
        assert!(prompt.contains("Method: roasted cooking technique"));
        assert!(prompt.contains("Spice Level: mild"));
        assert!(prompt.contains("Creativity Factor: 33"));
        assert!(prompt.contains("Respond ONLY with valid JSON"));
    }
}
