use crate::domain::entities::{Recipe, RecordId, User};
use crate::domain::forms::FormValues;
use crate::domain::types::{ModalMode, ResourceKind, Tab};

/// The shared create/edit dialog. Present only while it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub mode: ModalMode,
    pub form: FormValues,
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub active_tab: Tab,
    pub users: Vec<User>,
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    /// At most one dialog exists at a time; `None` means closed.
    pub modal: Option<Modal>,
}

impl PanelState {
    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_some()
    }

    pub fn find_user(&self, id: &RecordId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn find_recipe(&self, id: &RecordId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    /// Form values of the cached record, if the panel currently holds it.
    pub fn cached_form(&self, kind: ResourceKind, id: &RecordId) -> Option<FormValues> {
        match kind {
            ResourceKind::User => self.find_user(id).map(FormValues::from),
            ResourceKind::Recipe => self.find_recipe(id).map(FormValues::from),
        }
    }
}
