//! Backend traits describing where the panel's records live.

use async_trait::async_trait;
use thiserror::Error;

use recipe_admin_api_types::{
    RecipeCreateRequest, RecipeUpdateRequest, UserCreateRequest, UserUpdateRequest,
};

use crate::domain::entities::{Recipe, RecordId, User};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("`{id}` cannot address a single record")]
    InvalidId { id: String },
}

impl RepoError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

#[async_trait]
pub trait UsersRepo: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;

    async fn create_user(&self, params: UserCreateRequest) -> Result<(), RepoError>;

    async fn update_user(&self, id: &RecordId, params: UserUpdateRequest)
    -> Result<(), RepoError>;

    async fn delete_user(&self, id: &RecordId) -> Result<(), RepoError>;
}

#[async_trait]
pub trait RecipesRepo: Send + Sync {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RepoError>;

    async fn create_recipe(&self, params: RecipeCreateRequest) -> Result<(), RepoError>;

    async fn update_recipe(
        &self,
        id: &RecordId,
        params: RecipeUpdateRequest,
    ) -> Result<(), RepoError>;

    async fn delete_recipe(&self, id: &RecordId) -> Result<(), RepoError>;
}
