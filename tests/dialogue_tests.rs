use pantrychef::dialogue::{DisplayedRecipe, RecipeDialogueState};
use pantrychef::recipe_model::{Recipe, RecipeSearchResult};
use pantrychef::session::SessionContext;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shown() -> DisplayedRecipe {
        DisplayedRecipe {
            ingredient_text: "chicken, rice".to_string(),
            result: RecipeSearchResult {
                recipe: Recipe {
                    id: "1".to_string(),
                    title: "Chicken Rice Bowl".to_string(),
                    description: "Comfort food.".to_string(),
                    ingredients: vec!["chicken".to_string(), "rice".to_string()],
                    instructions: vec!["Cook".to_string()],
                    cooking_time: "30 minutes".to_string(),
                    servings: 2,
                    vector: vec![0.1, 0.2],
                },
                similarity_score: 0.95,
                matched_ingredients: vec!["chicken".to_string(), "rice".to_string()],
                graph_path: vec!["chicken, rice → AI Generated Recipe".to_string()],
            },
        }
    }

    #[test]
    fn test_default_state_is_start() {
        assert!(matches!(
            RecipeDialogueState::default(),
            RecipeDialogueState::Start
        ));
    }

    #[test]
    fn test_states_round_trip_through_serde() {
        let state = RecipeDialogueState::RecipeShown {
            api_key: "AIzaSyExample".to_string(),
            session: SessionContext::new(),
            shown: sample_shown(),
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: RecipeDialogueState = serde_json::from_str(&json).unwrap();

        match back {
            RecipeDialogueState::RecipeShown { api_key, shown, .. } => {
                assert_eq!(api_key, "AIzaSyExample");
                assert_eq!(shown.result.recipe.title, "Chicken Rice Bowl");
            }
            other => panic!("expected RecipeShown, got {other:?}"),
        }
    }

    #[test]
    fn test_generating_state_keeps_the_fallback_result() {
        let state = RecipeDialogueState::Generating {
            api_key: "AIzaSyExample".to_string(),
            session: SessionContext::new(),
            ingredient_text: "chicken, rice".to_string(),
            previous: Some(sample_shown()),
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: RecipeDialogueState = serde_json::from_str(&json).unwrap();

        match back {
            RecipeDialogueState::Generating { previous, .. } => {
                assert_eq!(
                    previous.unwrap().result.recipe.title,
                    "Chicken Rice Bowl"
                );
            }
            other => panic!("expected Generating, got {other:?}"),
        }
    }
}
