use serde::{Deserialize, Serialize};

use super::types::*;
use crate::model::{Recipe, RecipePayload, RecipesResponse};

pub struct ListRecipes {
    /// 0 asks for every recipe.
    pub limit: u64,
    pub skip: u64,
}

impl Api for ListRecipes {
    type Body = ();
    type Output = RecipesResponse;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        "/recipes".into()
    }

    fn query(&self) -> Params {
        vec![("limit", self.limit.to_string()), ("skip", self.skip.to_string())]
    }
}

pub struct GetRecipe {
    pub id: i64,
}

impl Api for GetRecipe {
    type Body = ();
    type Output = Recipe;
    const OPERATION: Operation = Operation::Get;

    fn path(&self) -> String {
        format!("/recipes/{}", self.id)
    }
}

pub struct AddRecipe<'a> {
    pub payload: &'a RecipePayload,
}

impl Api for AddRecipe<'_> {
    type Body = RecipePayload;
    type Output = Recipe;
    const OPERATION: Operation = Operation::Post;

    fn path(&self) -> String {
        "/recipes/add".into()
    }

    fn body(&self) -> Option<&RecipePayload> {
        Some(self.payload)
    }
}

pub struct UpdateRecipe<'a> {
    pub id: i64,
    pub payload: &'a RecipePayload,
}

impl Api for UpdateRecipe<'_> {
    type Body = RecipePayload;
    type Output = Recipe;
    const OPERATION: Operation = Operation::Put;

    fn path(&self) -> String {
        format!("/recipes/{}", self.id)
    }

    fn body(&self) -> Option<&RecipePayload> {
        Some(self.payload)
    }
}

pub struct DeleteRecipe {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_on: Option<String>,
}

impl Api for DeleteRecipe {
    type Body = ();
    type Output = DeletedRecipe;
    const OPERATION: Operation = Operation::Delete;

    fn path(&self) -> String {
        format!("/recipes/{}", self.id)
    }
}
