#[cfg(test)]
mod tests {
    use pantrychef::text_processing::{
        find_matched_ingredients, similarity_score, strip_markdown_fence, tokenize_ingredients,
        MAX_SIMILARITY, MIN_SIMILARITY,
    };

    #[test]
    fn test_tokenize_commas_and_the_word_and() {
        let tokens = tokenize_ingredients("chicken, broccoli and soy sauce");
        assert_eq!(tokens, vec!["chicken", "broccoli", "soy sauce"]);
    }

    #[test]
    fn test_tokenize_lowercases_and_trims() {
        let tokens = tokenize_ingredients("  Chicken ;  RICE  ");
        assert_eq!(tokens, vec!["chicken", "rice"]);
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        assert!(tokenize_ingredients("  ,, ;  and  ").is_empty());
        assert!(tokenize_ingredients("").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_order() {
        let tokens = tokenize_ingredients("garlic, onion, garlic");
        assert_eq!(tokens, vec!["garlic", "onion", "garlic"]);
    }

    #[test]
    fn test_overlap_matches_in_input_order() {
        let input = vec!["chicken".to_string(), "soy sauce".to_string()];
        let recipe = vec![
            "2 cups chicken breast".to_string(),
            "soy sauce 1 tbsp".to_string(),
            "garlic".to_string(),
        ];

        let matched = find_matched_ingredients(&input, &recipe);

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0], "2 cups chicken breast");
        assert_eq!(matched[1], "soy sauce 1 tbsp");
    }

    #[test]
    fn test_overlap_takes_first_match_not_best() {
        let input = vec!["chicken".to_string()];
        let recipe = vec![
            "chicken stock".to_string(),
            "chicken breast".to_string(),
        ];

        let matched = find_matched_ingredients(&input, &recipe);
        assert_eq!(matched, vec!["chicken stock"]);
    }

    #[test]
    fn test_overlap_can_record_the_same_line_twice() {
        let input = vec!["chicken".to_string(), "chicken breast".to_string()];
        let recipe = vec!["2 cups chicken breast".to_string()];

        let matched = find_matched_ingredients(&input, &recipe);
        assert_eq!(
            matched,
            vec!["2 cups chicken breast", "2 cups chicken breast"]
        );
    }

    #[test]
    fn test_overlap_matches_substring_in_either_direction() {
        // Input token longer than the recipe line
        let input = vec!["fresh garlic".to_string()];
        let recipe = vec!["garlic".to_string()];

        let matched = find_matched_ingredients(&input, &recipe);
        assert_eq!(matched, vec!["garlic"]);
    }

    #[test]
    fn test_overlap_with_no_matches_is_empty() {
        let input = vec!["tofu".to_string()];
        let recipe = vec!["beef".to_string(), "carrots".to_string()];
        assert!(find_matched_ingredients(&input, &recipe).is_empty());
    }

    #[test]
    fn test_similarity_stays_within_bounds() {
        let combos = [
            (0, 0, 0),
            (0, 5, 10),
            (1, 1, 1),
            (2, 2, 3),
            (10, 2, 3),
            (100, 1, 1),
        ];
        for (matches, inputs, recipes) in combos {
            let score = similarity_score(matches, inputs, recipes);
            assert!(
                (MIN_SIMILARITY..=MAX_SIMILARITY).contains(&score),
                "score {score} out of bounds for ({matches}, {inputs}, {recipes})"
            );
        }
    }

    #[test]
    fn test_similarity_clamps_both_ends() {
        // No overlap still reports the floor
        assert_eq!(similarity_score(0, 3, 8), MIN_SIMILARITY);
        // Overfull match counts cap at the ceiling
        assert_eq!(similarity_score(10, 2, 3), MAX_SIMILARITY);
    }

    #[test]
    fn test_similarity_uses_the_larger_list_as_denominator() {
        // 4 matches over max(5, 4) = 5
        assert!((similarity_score(4, 5, 4) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_fenced_json_parses_identically_to_unfenced() {
        let bare = r#"{"title":"Stew","servings":4}"#;
        let fenced = format!("```json\n{bare}\n```");
        let plain_fence = format!("```\n{bare}\n```");

        let from_bare: serde_json::Value = serde_json::from_str(strip_markdown_fence(bare)).unwrap();
        let from_fenced: serde_json::Value =
            serde_json::from_str(strip_markdown_fence(&fenced)).unwrap();
        let from_plain: serde_json::Value =
            serde_json::from_str(strip_markdown_fence(&plain_fence)).unwrap();

        assert_eq!(from_bare, from_fenced);
        assert_eq!(from_bare, from_plain);
    }

    #[test]
    fn test_fence_stripping_handles_surrounding_whitespace() {
        assert_eq!(
            strip_markdown_fence("  ```json\n{\"a\":1}\n```  "),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_non_fenced_text_is_only_trimmed() {
        assert_eq!(strip_markdown_fence("  not json  "), "not json");
    }
}
