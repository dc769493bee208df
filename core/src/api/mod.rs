pub mod auth;
pub mod client;
pub mod recipes;
pub mod types;
pub mod users;

use async_trait::async_trait;

use crate::error::Result;
use crate::form::LoginForm;
use crate::model::{Listing, Recipe, RecipePayload, User};
use crate::pagination::PageParams;
use crate::session::Session;

pub use client::Client;
pub use recipes::DeletedRecipe;
pub use types::{Api, Operation, Params};

/// Operations of the recipe service. Mutations take the session explicitly.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn recipes(&self, page: PageParams) -> Result<Listing<Recipe>>;
    async fn all_recipes(&self) -> Result<Vec<Recipe>>;
    async fn recipe(&self, id: i64) -> Result<Recipe>;
    async fn create_recipe(&self, session: &Session, payload: &RecipePayload) -> Result<Recipe>;
    async fn update_recipe(
        &self,
        session: &Session,
        id: i64,
        payload: &RecipePayload,
    ) -> Result<Recipe>;
    async fn delete_recipe(&self, session: &Session, id: i64) -> Result<DeletedRecipe>;

    async fn users(&self, page: PageParams) -> Result<Listing<User>>;
    async fn all_users(&self) -> Result<Vec<User>>;
    async fn user(&self, id: i64) -> Result<User>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn login(&self, form: &LoginForm) -> Result<Session>;
    async fn me(&self, session: &Session) -> Result<User>;
}
