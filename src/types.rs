use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipe difficulty levels, serialized as their display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A single recipe ingredient. `amount` is opaque free-form text and may
/// be fractional ("2¼"); `unit` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

/// A recipe record as stored under the recipes collection key.
///
/// `rating` and `review_count` are stored fields, not live aggregates;
/// they are recomputed only when a review is added through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_gallery: Option<Vec<String>>,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub approved: bool,
    pub rating: f64,
    pub review_count: u32,
    pub view_count: u64,
}

/// A review left on a recipe. Ratings are whole stars, 1 through 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub recipe_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A browsing category. Categories are seed data, not a persisted
/// collection; `recipe_count` is filled in only where a caller derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// A user record. `email` is the identity key the admin check compares
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A user-to-recipe favorite association. Removing one never touches the
/// underlying recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFavorite {
    pub id: String,
    pub user_id: String,
    pub recipe_id: String,
    pub created_at: DateTime<Utc>,
}

/// Authoring input for a new recipe, prior to validation and id
/// assignment.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub image_url: String,
    pub image_gallery: Option<Vec<String>>,
}

impl RecipeDraft {
    /// Coerce a free-form minutes field to a number. Malformed input
    /// becomes 0 rather than an error.
    pub fn parse_minutes(input: &str) -> u32 {
        input.trim().parse().unwrap_or(0)
    }

    /// Coerce a free-form servings field to a positive number. Malformed
    /// or zero input becomes 1.
    pub fn parse_servings(input: &str) -> u32 {
        match input.trim().parse() {
            Ok(0) | Err(_) => 1,
            Ok(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("easy"), None);
    }

    #[test]
    fn test_difficulty_serializes_as_display_name() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_parse_minutes_coerces_garbage_to_zero() {
        assert_eq!(RecipeDraft::parse_minutes("25"), 25);
        assert_eq!(RecipeDraft::parse_minutes(" 40 "), 40);
        assert_eq!(RecipeDraft::parse_minutes("soon"), 0);
        assert_eq!(RecipeDraft::parse_minutes(""), 0);
        assert_eq!(RecipeDraft::parse_minutes("-5"), 0);
    }

    #[test]
    fn test_parse_servings_coerces_to_at_least_one() {
        assert_eq!(RecipeDraft::parse_servings("4"), 4);
        assert_eq!(RecipeDraft::parse_servings("0"), 1);
        assert_eq!(RecipeDraft::parse_servings("many"), 1);
    }

    #[test]
    fn test_recipe_timestamps_serialize_as_iso8601() {
        let recipe = Recipe {
            id: "1".to_string(),
            title: "Toast".to_string(),
            description: "Bread, but better.".to_string(),
            category: "Quick & Easy".to_string(),
            cuisine: "American".to_string(),
            prep_time: 2,
            cook_time: 3,
            servings: 1,
            difficulty: Difficulty::Easy,
            ingredients: vec![Ingredient {
                name: "Bread".to_string(),
                amount: "1".to_string(),
                unit: "slice".to_string(),
            }],
            instructions: vec!["Toast the bread.".to_string()],
            image_url: "https://example.com/toast.jpg".to_string(),
            image_gallery: None,
            author_id: "user1".to_string(),
            author_name: "Sam".to_string(),
            created_at: "2024-01-15T10:00:00Z".parse().unwrap(),
            updated_at: "2024-01-15T10:00:00Z".parse().unwrap(),
            approved: true,
            rating: 0.0,
            review_count: 0,
            view_count: 0,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["created_at"], "2024-01-15T10:00:00Z");
        // Absent gallery is omitted entirely, not serialized as null
        assert!(json.get("image_gallery").is_none());
    }
}
