//! Notifications raised by panel operations.

use serde::Serialize;

use crate::domain::types::{ModalMode, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }

    pub fn fetch_failed() -> Self {
        Self::error("Failed to fetch data")
    }

    pub fn saved(mode: &ModalMode) -> Self {
        Self::success(format!("{} successful", mode.title()))
    }

    pub fn save_failed(mode: &ModalMode) -> Self {
        Self::error(format!(
            "Failed to {} {}",
            mode.action().as_str(),
            mode.resource().as_str()
        ))
    }

    pub fn deleted(kind: ResourceKind) -> Self {
        Self::success(format!("{} deleted successfully", kind.label()))
    }

    pub fn delete_failed(kind: ResourceKind) -> Self {
        Self::error(format!("Failed to delete {}", kind.as_str()))
    }
}
