//! Key-value persistence abstraction.
//!
//! Collections are stored as serialized JSON strings under namespaced
//! keys. The trait is object-safe so callers can hold a boxed store; the
//! in-memory implementation is the test substitute, the disk
//! implementation the durable one.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Namespaced storage keys, one per logical collection.
pub mod keys {
    pub const RECIPES: &str = "recipeShare_recipes";
    pub const USERS: &str = "recipeShare_users";
    pub const REVIEWS: &str = "recipeShare_reviews";
    pub const FAVORITES: &str = "recipeShare_favorites";
    pub const ANALYTICS: &str = "recipeShare_analytics";
}

/// A store of serialized values by key.
///
/// Implementations do not interpret the values; (de)serialization and
/// the fallback-to-default contract live in the catalog layer.
pub trait KeyValueStore {
    /// Get the raw stored value, or None if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Whether a value exists under the key.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
