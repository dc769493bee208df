pub mod type_enum;

pub mod recipe;
pub mod user;

pub mod auth;
pub mod listing;

pub use listing::{Listing, RecipesResponse, UsersResponse};
pub use recipe::{Recipe, RecipePayload};
pub use type_enum::{Difficulty, Role};
pub use user::{Address, Coordinates, User};
