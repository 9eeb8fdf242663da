//! Data and logic core for the RecipeShare recipe-sharing app.
//!
//! Everything flows one way: the key-value [`store`] backs the
//! [`catalog`], whose collections feed the pure [`search`] filter/sort
//! pipeline and the [`stats`] dashboard aggregation. The presentation
//! layer lives elsewhere and only feeds filter and draft values back in.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use config::{AppConfig, AppSettings, OwnerProfile};
pub use error::{CatalogError, StoreError};
pub use search::{
    distinct_categories, filter_favorites, filter_recipes, sort_recipes, SearchFilters, SortKey,
    DEFAULT_MAX_PREP_TIME,
};
pub use stats::{aggregate, DashboardStats};
pub use store::{DiskStore, KeyValueStore, MemoryStore};
pub use types::{
    Category, Difficulty, Ingredient, Recipe, RecipeDraft, Review, User, UserFavorite, UserRole,
};
