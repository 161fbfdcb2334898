/// Database access layer
pub mod recipe_repo;

pub use recipe_repo::RecipeRepo;

/// Name of the recipe collection
pub const RECIPES_COLLECTION: &str = "recipes";
