//! Typed catalog over the key-value store.
//!
//! The catalog owns the persistence contract: collection reads fall back
//! to the empty default when a key is absent or its value is malformed,
//! and write failures are logged and swallowed, leaving the previously
//! stored value intact. No store failure propagates to callers.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::CatalogError;
use crate::seed;
use crate::store::{keys, KeyValueStore};
use crate::types::{Difficulty, Recipe, RecipeDraft, Review, User, UserFavorite};

/// The working set of application data, read from and written through an
/// injected [`KeyValueStore`].
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
    config: AppConfig,
}

impl<S: KeyValueStore> Catalog<S> {
    pub fn new(store: S, config: AppConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Seed the store on first run. Idempotent: collections that already
    /// exist are left untouched, even if a user has modified them.
    pub fn initialize(&mut self) {
        if self.store.contains(keys::RECIPES) {
            tracing::debug!(key = keys::RECIPES, "collection present, skipping seed");
        } else {
            let recipes = seed::sample_recipes(&self.config);
            tracing::debug!(key = keys::RECIPES, count = recipes.len(), "seeding");
            self.write_collection(keys::RECIPES, &recipes);
        }

        if self.store.contains(keys::USERS) {
            tracing::debug!(key = keys::USERS, "collection present, skipping seed");
        } else {
            let users = vec![seed::owner_user(&self.config)];
            tracing::debug!(key = keys::USERS, count = users.len(), "seeding");
            self.write_collection(keys::USERS, &users);
        }
    }

    /// Read a collection, or the empty default if the key is absent or
    /// its stored value cannot be deserialized.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored collection is malformed, using default");
                Vec::new()
            }
        }
    }

    /// Serialize and store a collection. Failures are logged and
    /// swallowed; the prior stored value stays in place.
    fn write_collection<T: Serialize>(&mut self, key: &str, items: &[T]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize collection");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &raw) {
            tracing::warn!(key, error = %e, "failed to persist collection");
        }
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        self.read_collection(keys::RECIPES)
    }

    pub fn users(&self) -> Vec<User> {
        self.read_collection(keys::USERS)
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.read_collection(keys::REVIEWS)
    }

    pub fn favorites(&self) -> Vec<UserFavorite> {
        self.read_collection(keys::FAVORITES)
    }

    /// Look up a recipe by id. A missing id is a not-found value, not an
    /// error.
    pub fn recipe(&self, id: &str) -> Option<Recipe> {
        self.recipes().into_iter().find(|r| r.id == id)
    }

    /// Validate a draft and add it to the catalog.
    ///
    /// Required: title, description, category, cuisine, at least one
    /// ingredient, at least one instruction step, and an image. The
    /// per-user recipe cap from settings is enforced; approval follows
    /// the auto-approve setting. Zero servings are coerced to one.
    pub fn submit_recipe(
        &mut self,
        draft: RecipeDraft,
        author_id: &str,
        author_name: &str,
    ) -> Result<Recipe, CatalogError> {
        if draft.title.trim().is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        if draft.description.trim().is_empty() {
            return Err(CatalogError::MissingField("description"));
        }
        if draft.category.trim().is_empty() {
            return Err(CatalogError::MissingField("category"));
        }
        if draft.cuisine.trim().is_empty() {
            return Err(CatalogError::MissingField("cuisine"));
        }
        if draft.ingredients.is_empty() {
            return Err(CatalogError::NoIngredients);
        }
        if draft.instructions.is_empty() {
            return Err(CatalogError::NoInstructions);
        }
        if draft.image_url.trim().is_empty() {
            return Err(CatalogError::MissingField("image_url"));
        }

        let mut recipes = self.recipes();

        let cap = self.config.settings.max_recipes_per_user;
        let authored = recipes.iter().filter(|r| r.author_id == author_id).count();
        if authored as u32 >= cap {
            return Err(CatalogError::RecipeLimit(cap));
        }

        let now = Utc::now();
        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            cuisine: draft.cuisine,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings.max(1),
            difficulty: draft.difficulty.unwrap_or(Difficulty::Easy),
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image_url: draft.image_url,
            image_gallery: draft.image_gallery.filter(|g| !g.is_empty()),
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            created_at: now,
            updated_at: now,
            approved: self.config.settings.auto_approve,
            rating: 0.0,
            review_count: 0,
            view_count: 0,
        };

        recipes.push(recipe.clone());
        self.write_collection(keys::RECIPES, &recipes);

        Ok(recipe)
    }

    /// Add a review for a recipe, newest first.
    ///
    /// The rating is clamped to 1–5. The recipe's stored rating and
    /// review count are recomputed from its reviews in the same call, so
    /// the cached fields cannot drift through this path.
    pub fn add_review(
        &mut self,
        recipe_id: &str,
        user_id: &str,
        user_name: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Review, CatalogError> {
        let mut recipes = self.recipes();
        let position = recipes
            .iter()
            .position(|r| r.id == recipe_id)
            .ok_or_else(|| CatalogError::RecipeNotFound(recipe_id.to_string()))?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            recipe_id: recipe_id.to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            rating: rating.clamp(1, 5),
            comment,
            created_at: Utc::now(),
        };

        let mut reviews = self.reviews();
        reviews.insert(0, review.clone());

        let recipe_reviews: Vec<&Review> =
            reviews.iter().filter(|r| r.recipe_id == recipe_id).collect();
        let sum: u32 = recipe_reviews.iter().map(|r| u32::from(r.rating)).sum();
        let avg = f64::from(sum) / recipe_reviews.len() as f64;

        recipes[position].rating = (avg * 10.0).round() / 10.0;
        recipes[position].review_count = recipe_reviews.len() as u32;

        self.write_collection(keys::REVIEWS, &reviews);
        self.write_collection(keys::RECIPES, &recipes);

        Ok(review)
    }

    /// Reviews for one recipe, in stored (newest first) order.
    pub fn reviews_for(&self, recipe_id: &str) -> Vec<Review> {
        self.reviews()
            .into_iter()
            .filter(|r| r.recipe_id == recipe_id)
            .collect()
    }

    /// Favorite or unfavorite a recipe. Returns whether the recipe is
    /// favorited after the call.
    pub fn toggle_favorite(&mut self, user_id: &str, recipe_id: &str) -> bool {
        let mut favorites = self.favorites();

        if let Some(position) = favorites
            .iter()
            .position(|f| f.user_id == user_id && f.recipe_id == recipe_id)
        {
            favorites.remove(position);
            self.write_collection(keys::FAVORITES, &favorites);
            false
        } else {
            favorites.push(UserFavorite {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                recipe_id: recipe_id.to_string(),
                created_at: Utc::now(),
            });
            self.write_collection(keys::FAVORITES, &favorites);
            true
        }
    }

    pub fn is_favorited(&self, user_id: &str, recipe_id: &str) -> bool {
        self.favorites()
            .iter()
            .any(|f| f.user_id == user_id && f.recipe_id == recipe_id)
    }

    /// The user's favorited recipes, in favoriting order. Associations
    /// pointing at recipes that no longer exist are skipped.
    pub fn favorite_recipes(&self, user_id: &str) -> Vec<Recipe> {
        let recipes = self.recipes();
        self.favorites()
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| recipes.iter().find(|r| r.id == f.recipe_id).cloned())
            .collect()
    }

    /// Remove several favorite associations at once. Recipes themselves
    /// are untouched.
    pub fn remove_favorites(&mut self, user_id: &str, recipe_ids: &[&str]) {
        let mut favorites = self.favorites();
        favorites.retain(|f| !(f.user_id == user_id && recipe_ids.contains(&f.recipe_id.as_str())));
        self.write_collection(keys::FAVORITES, &favorites);
    }
}
