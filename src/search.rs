//! Recipe filtering and sorting.
//!
//! Both stages are pure functions over the in-memory catalog: filtering
//! narrows by query text and structured constraints, sorting orders the
//! result by the chosen key. Neither computes a relevance score; the
//! "relevance" order is the catalog's insertion order.

use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// Maximum prep time a default filter allows, in minutes.
pub const DEFAULT_MAX_PREP_TIME: u32 = 240;

/// Structured search constraints. Empty string fields match anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// Free-text query, matched case-insensitively against title,
    /// description, and ingredient names.
    pub query: String,
    /// Exact category name, or empty for any.
    pub category: String,
    /// Exact cuisine name, or empty for any.
    pub cuisine: String,
    /// Exact difficulty display name ("Easy"/"Medium"/"Hard"), or empty
    /// for any.
    pub difficulty: String,
    /// Inclusive ceiling on prep time. Cook time is not bounded.
    pub max_prep_time: u32,
    /// Required ingredient names. Accepted but not consulted by
    /// [`filter_recipes`].
    pub ingredients: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            cuisine: String::new(),
            difficulty: String::new(),
            max_prep_time: DEFAULT_MAX_PREP_TIME,
            ingredients: Vec::new(),
        }
    }
}

/// Result ordering criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Relevance,
    Rating,
    Newest,
    Popular,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Relevance,
        SortKey::Rating,
        SortKey::Newest,
        SortKey::Popular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "relevance" => Some(SortKey::Relevance),
            "rating" => Some(SortKey::Rating),
            "newest" => Some(SortKey::Newest),
            "popular" => Some(SortKey::Popular),
            _ => None,
        }
    }
}

/// Select the recipes matching all of the given filters, preserving
/// input order.
///
/// A recipe matches when every constraint holds: the query (if any)
/// appears case-insensitively in the title, description, or an
/// ingredient name; category, cuisine, and difficulty (if set) match
/// exactly; and prep time is within the ceiling.
pub fn filter_recipes(recipes: &[Recipe], filters: &SearchFilters) -> Vec<Recipe> {
    let query = filters.query.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            let matches_query = query.is_empty()
                || recipe.title.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ing| ing.name.to_lowercase().contains(&query));

            let matches_category =
                filters.category.is_empty() || recipe.category == filters.category;
            let matches_cuisine = filters.cuisine.is_empty() || recipe.cuisine == filters.cuisine;
            let matches_difficulty = filters.difficulty.is_empty()
                || recipe.difficulty.as_str() == filters.difficulty;
            let matches_prep_time = recipe.prep_time <= filters.max_prep_time;

            matches_query
                && matches_category
                && matches_cuisine
                && matches_difficulty
                && matches_prep_time
        })
        .cloned()
        .collect()
}

/// The favorites-page variant: query matches title and description only
/// (not ingredients), plus an exact category constraint.
pub fn filter_favorites(recipes: &[Recipe], query: &str, category: &str) -> Vec<Recipe> {
    let query = query.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            let matches_query = query.is_empty()
                || recipe.title.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query);

            let matches_category = category.is_empty() || recipe.category == category;

            matches_query && matches_category
        })
        .cloned()
        .collect()
}

/// Distinct category names in first-seen order.
pub fn distinct_categories(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = Vec::new();
    for recipe in recipes {
        if !seen.contains(&recipe.category) {
            seen.push(recipe.category.clone());
        }
    }
    seen
}

/// Order recipes by the given key.
///
/// Every ordering is stable: recipes with equal keys keep their relative
/// input order, so repeated sorts of unchanged input are deterministic.
/// [`SortKey::Relevance`] is an identity pass.
pub fn sort_recipes(mut recipes: Vec<Recipe>, key: SortKey) -> Vec<Recipe> {
    match key {
        SortKey::Relevance => {}
        SortKey::Rating => recipes.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Popular => recipes.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Ingredient};
    use chrono::{DateTime, Utc};

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: "Main Course".to_string(),
            cuisine: "Italian".to_string(),
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            difficulty: Difficulty::Easy,
            ingredients: vec![],
            instructions: vec!["Cook.".to_string()],
            image_url: String::new(),
            image_gallery: None,
            author_id: "user1".to_string(),
            author_name: "Test".to_string(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
            approved: true,
            rating: 4.0,
            review_count: 0,
            view_count: 100,
        }
    }

    fn sample_catalog() -> Vec<Recipe> {
        let mut cookies = recipe("1", "Classic Chocolate Chip Cookies");
        cookies.description = "Soft, chewy cookies with melty chocolate chips.".to_string();
        cookies.category = "Desserts".to_string();
        cookies.cuisine = "American".to_string();
        cookies.prep_time = 15;
        cookies.ingredients = vec![
            Ingredient {
                name: "All-purpose flour".to_string(),
                amount: "2¼".to_string(),
                unit: "cups".to_string(),
            },
            Ingredient {
                name: "Chocolate chips".to_string(),
                amount: "2".to_string(),
                unit: "cups".to_string(),
            },
        ];
        cookies.rating = 4.8;
        cookies.view_count = 2847;
        cookies.created_at = "2024-01-15T10:00:00Z".parse().unwrap();

        let mut pizza = recipe("2", "Margherita Pizza");
        pizza.description = "A classic Italian pizza with fresh tomatoes.".to_string();
        pizza.prep_time = 20;
        pizza.difficulty = Difficulty::Medium;
        pizza.ingredients = vec![Ingredient {
            name: "Pizza dough".to_string(),
            amount: "1".to_string(),
            unit: "ball".to_string(),
        }];
        pizza.rating = 4.9;
        pizza.view_count = 1923;
        pizza.created_at = "2024-01-14T14:30:00Z".parse().unwrap();

        let mut bowl = recipe("3", "Buddha Bowl with Tahini Dressing");
        bowl.description = "A nourishing vegan bowl.".to_string();
        bowl.category = "Healthy".to_string();
        bowl.cuisine = "Mediterranean".to_string();
        bowl.prep_time = 25;
        bowl.ingredients = vec![Ingredient {
            name: "Quinoa".to_string(),
            amount: "1".to_string(),
            unit: "cup".to_string(),
        }];
        bowl.rating = 4.7;
        bowl.view_count = 3421;
        bowl.created_at = "2024-01-13T09:15:00Z".parse().unwrap();

        let mut curry = recipe("4", "Spicy Thai Green Curry");
        curry.description = "Aromatic and creamy Thai curry.".to_string();
        curry.cuisine = "Asian".to_string();
        curry.prep_time = 15;
        curry.difficulty = Difficulty::Medium;
        curry.ingredients = vec![Ingredient {
            name: "Coconut milk".to_string(),
            amount: "400".to_string(),
            unit: "ml".to_string(),
        }];
        curry.rating = 4.6;
        curry.view_count = 4521;
        curry.created_at = "2024-01-12T16:45:00Z".parse().unwrap();

        vec![cookies, pizza, bowl, curry]
    }

    #[test]
    fn test_default_filters_are_identity() {
        let recipes = sample_catalog();
        let result = filter_recipes(&recipes, &SearchFilters::default());
        assert_eq!(result, recipes);
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            query: "chocolate".to_string(),
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Classic Chocolate Chip Cookies");
    }

    #[test]
    fn test_query_matches_description() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            query: "vegan".to_string(),
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn test_query_matches_ingredient_name() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            query: "coconut".to_string(),
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "4");
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            category: "Desserts".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_recipes(&recipes, &filters).len(), 1);

        let filters = SearchFilters {
            category: "desserts".to_string(),
            ..Default::default()
        };
        assert!(filter_recipes(&recipes, &filters).is_empty());
    }

    #[test]
    fn test_cuisine_filter() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            cuisine: "Italian".to_string(),
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_difficulty_filter() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            difficulty: "Medium".to_string(),
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "2");
        assert_eq!(result[1].id, "4");
    }

    #[test]
    fn test_prep_time_ceiling_is_inclusive() {
        // prep times: 15, 20, 25, 15
        let mut recipes = sample_catalog();
        recipes[0].prep_time = 20;
        recipes[1].prep_time = 30;
        recipes[2].prep_time = 25;
        recipes[3].prep_time = 15;

        let filters = SearchFilters {
            max_prep_time: 20,
            ..Default::default()
        };
        let result = filter_recipes(&recipes, &filters);
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_prep_time_excludes_regardless_of_query_match() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            query: "chocolate".to_string(),
            max_prep_time: 10,
            ..Default::default()
        };
        assert!(filter_recipes(&recipes, &filters).is_empty());
    }

    #[test]
    fn test_cook_time_is_not_bounded() {
        let mut recipes = sample_catalog();
        recipes[0].cook_time = 500;
        let filters = SearchFilters::default();
        assert_eq!(filter_recipes(&recipes, &filters).len(), 4);
    }

    #[test]
    fn test_ingredients_field_is_not_consulted() {
        let recipes = sample_catalog();
        let filters = SearchFilters {
            ingredients: vec!["unobtainium".to_string()],
            ..Default::default()
        };
        // The required-ingredients list does not narrow results.
        assert_eq!(filter_recipes(&recipes, &filters).len(), 4);
    }

    #[test]
    fn test_filter_favorites_ignores_ingredients() {
        let recipes = sample_catalog();
        // "coconut" only appears in an ingredient name, which the
        // favorites filter does not search.
        assert!(filter_favorites(&recipes, "coconut", "").is_empty());
        assert_eq!(filter_favorites(&recipes, "thai", "").len(), 1);
        assert_eq!(filter_favorites(&recipes, "", "Main Course").len(), 2);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let recipes = sample_catalog();
        assert_eq!(
            distinct_categories(&recipes),
            vec!["Desserts", "Main Course", "Healthy"]
        );
    }

    #[test]
    fn test_sort_relevance_is_identity() {
        let recipes = sample_catalog();
        let sorted = sort_recipes(recipes.clone(), SortKey::Relevance);
        assert_eq!(sorted, recipes);
    }

    #[test]
    fn test_sort_rating_non_increasing() {
        let sorted = sort_recipes(sample_catalog(), SortKey::Rating);
        for pair in sorted.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        assert_eq!(sorted[0].id, "2");
    }

    #[test]
    fn test_sort_popular_non_increasing() {
        let sorted = sort_recipes(sample_catalog(), SortKey::Popular);
        for pair in sorted.windows(2) {
            assert!(pair[0].view_count >= pair[1].view_count);
        }
        assert_eq!(sorted[0].id, "4");
    }

    #[test]
    fn test_sort_newest() {
        let mut a = recipe("a", "A");
        let mut b = recipe("b", "B");
        let mut c = recipe("c", "C");
        a.created_at = "2024-01-10T00:00:00Z".parse().unwrap();
        b.created_at = "2024-01-15T00:00:00Z".parse().unwrap();
        c.created_at = "2024-01-12T00:00:00Z".parse().unwrap();

        let sorted = sort_recipes(vec![a, b, c], SortKey::Newest);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let mut first = recipe("first", "First");
        let mut second = recipe("second", "Second");
        first.rating = 4.5;
        second.rating = 4.5;
        first.view_count = 7;
        second.view_count = 7;

        let sorted = sort_recipes(vec![first.clone(), second.clone()], SortKey::Rating);
        assert_eq!(sorted[0].id, "first");
        let sorted = sort_recipes(vec![first, second], SortKey::Popular);
        assert_eq!(sorted[0].id, "first");
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), Some(*key));
        }
        assert_eq!(SortKey::from_str("best"), None);
    }
}
