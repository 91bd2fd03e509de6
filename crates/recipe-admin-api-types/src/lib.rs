//! Wire types exchanged with the recipe backend.
//!
//! Field names follow what the backend emits (`_id`, `recipeImg`); the
//! plain spellings (`id`, `imageUrl`) are accepted on input as aliases.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque backend identifier of a user or recipe.
///
/// Backends emit either strings or integers; both are kept as their textual
/// form and always serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(value) => Self(value),
            WireId::Unsigned(value) => Self(value.to_string()),
            WireId::Signed(value) => Self(value.to_string()),
        })
    }
}

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Denormalized author of a recipe. Read-only from the panel's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatorRef {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "recipeImg", alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<CreatorRef>,
}

impl Recipe {
    pub const UNKNOWN_CREATOR: &'static str = "Unknown";

    /// Display name of the creator, `Unknown` when the backend did not embed one.
    pub fn creator_name(&self) -> &str {
        self.creator
            .as_ref()
            .and_then(|creator| creator.name.as_deref())
            .unwrap_or(Self::UNKNOWN_CREATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCreateRequest {
    pub title: String,
    #[serde(rename = "recipeImg")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeUpdateRequest {
    pub title: String,
    #[serde(rename = "recipeImg")]
    pub image_url: String,
}
