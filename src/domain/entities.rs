//! Backend-owned records the panel caches between loads.

pub use recipe_admin_api_types::{CreatorRef, Recipe, RecordId, User};
