//! Shared domain enumerations for resources, tabs and the modal dialog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::RecordId;

/// Backend-managed entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    User,
    Recipe,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::User => "User",
            ResourceKind::Recipe => "Recipe",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Recipe => "recipe",
        }
    }

    /// Path listing the collection. The recipe backend serves its list from
    /// the singular `recipe` route while writes go through `recipes`.
    pub fn list_path(self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Recipe => "recipe",
        }
    }

    /// Path accepting create requests. Single records for update and delete
    /// live one segment below it.
    pub fn collection_path(self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Recipe => "recipes",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection currently displayed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Users,
    Recipes,
}

impl Tab {
    pub fn resource(self) -> ResourceKind {
        match self {
            Tab::Users => ResourceKind::User,
            Tab::Recipes => ResourceKind::Recipe,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::Users => "User Details",
            Tab::Recipes => "Recipe Details",
        }
    }
}

impl From<ResourceKind> for Tab {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::User => Tab::Users,
            ResourceKind::Recipe => Tab::Recipes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Add,
    Edit,
}

impl ModalAction {
    pub fn label(self) -> &'static str {
        match self {
            ModalAction::Add => "Add",
            ModalAction::Edit => "Edit",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalAction::Add => "add",
            ModalAction::Edit => "edit",
        }
    }
}

/// Which create or edit operation the shared dialog represents.
///
/// Edit variants carry the id of the record being edited, so an update is
/// always addressed to the record the dialog was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    CreateUser,
    EditUser { id: RecordId },
    CreateRecipe,
    EditRecipe { id: RecordId },
}

impl ModalMode {
    pub fn create(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::User => ModalMode::CreateUser,
            ResourceKind::Recipe => ModalMode::CreateRecipe,
        }
    }

    pub fn edit(kind: ResourceKind, id: RecordId) -> Self {
        match kind {
            ResourceKind::User => ModalMode::EditUser { id },
            ResourceKind::Recipe => ModalMode::EditRecipe { id },
        }
    }

    pub fn resource(&self) -> ResourceKind {
        match self {
            ModalMode::CreateUser | ModalMode::EditUser { .. } => ResourceKind::User,
            ModalMode::CreateRecipe | ModalMode::EditRecipe { .. } => ResourceKind::Recipe,
        }
    }

    pub fn action(&self) -> ModalAction {
        match self {
            ModalMode::CreateUser | ModalMode::CreateRecipe => ModalAction::Add,
            ModalMode::EditUser { .. } | ModalMode::EditRecipe { .. } => ModalAction::Edit,
        }
    }

    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            ModalMode::EditUser { id } | ModalMode::EditRecipe { id } => Some(id),
            ModalMode::CreateUser | ModalMode::CreateRecipe => None,
        }
    }

    /// Dialog title, e.g. `Add User` or `Edit Recipe`.
    pub fn title(&self) -> String {
        format!("{} {}", self.action().label(), self.resource().label())
    }
}
