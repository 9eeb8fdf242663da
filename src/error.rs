use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Recipe must have at least one ingredient")]
    NoIngredients,

    #[error("Recipe must have at least one instruction step")]
    NoInstructions,

    #[error("Recipe limit reached ({0} per user)")]
    RecipeLimit(u32),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),
}
