//! Admin dashboard aggregation.

use serde::{Deserialize, Serialize};

use crate::types::{Recipe, Review, User};

/// Number of recipes in the popular list.
const POPULAR_COUNT: usize = 5;

/// Summary statistics derived from the full collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_recipes: usize,
    pub total_users: usize,
    pub total_reviews: usize,
    pub total_views: u64,
    /// Mean recipe rating, rounded to one decimal place. 0.0 when there
    /// are no recipes.
    pub avg_rating: f64,
    /// Top recipes by view count, descending, at most five.
    pub popular_recipes: Vec<Recipe>,
}

/// Recompute dashboard statistics from scratch.
///
/// Collections are small and bounded by the store, so there is no
/// incremental update model.
pub fn aggregate(recipes: &[Recipe], users: &[User], reviews: &[Review]) -> DashboardStats {
    let total_views = recipes.iter().map(|r| r.view_count).sum();

    let avg_rating = if recipes.is_empty() {
        0.0
    } else {
        let sum: f64 = recipes.iter().map(|r| r.rating).sum();
        (sum / recipes.len() as f64 * 10.0).round() / 10.0
    };

    let mut popular: Vec<Recipe> = recipes.to_vec();
    popular.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    popular.truncate(POPULAR_COUNT);

    DashboardStats {
        total_recipes: recipes.len(),
        total_users: users.len(),
        total_reviews: reviews.len(),
        total_views,
        avg_rating,
        popular_recipes: popular,
    }
}
