//! Orchestration of the administrative panel: loading both collections,
//! tracking the active tab, and driving the shared create/edit dialog.

use std::num::NonZeroUsize;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::admin::state::{Modal, PanelState};
use crate::application::admin::toast::Toast;
use crate::application::pagination::{Page, paginate};
use crate::application::repos::{RecipesRepo, RepoError, UsersRepo};
use crate::domain::entities::{Recipe, RecordId, User};
use crate::domain::error::DomainError;
use crate::domain::forms::FormValues;
use crate::domain::types::{ModalMode, ResourceKind, Tab};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Error)]
pub enum AdminPanelError {
    #[error("failed to fetch data")]
    Fetch(#[source] RepoError),
    #[error("failed to {action}")]
    Submit {
        action: String,
        #[source]
        source: SubmitError,
    },
    #[error("failed to delete {kind}")]
    Delete {
        kind: ResourceKind,
        #[source]
        source: RepoError,
    },
    #[error("no dialog is open")]
    ModalClosed,
    #[error(transparent)]
    Form(#[from] DomainError),
}

/// Rows of the active tab for one page.
#[derive(Debug, Clone)]
pub enum TabPage<'a> {
    Users(Page<'a, User>),
    Recipes(Page<'a, Recipe>),
}

pub struct AdminPanelController {
    users: Arc<dyn UsersRepo>,
    recipes: Arc<dyn RecipesRepo>,
    page_size: NonZeroUsize,
    state: PanelState,
    toasts: Vec<Toast>,
    loading: watch::Sender<bool>,
}

impl AdminPanelController {
    pub fn new(
        users: Arc<dyn UsersRepo>,
        recipes: Arc<dyn RecipesRepo>,
        page_size: NonZeroUsize,
    ) -> Self {
        Self {
            users,
            recipes,
            page_size,
            state: PanelState::default(),
            toasts: Vec::new(),
            loading: watch::Sender::new(false),
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.state.modal.as_ref()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Follow the loading flag while a load is in flight, e.g. to show a
    /// spinner from another task.
    pub fn loading_updates(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        self.loading.send_replace(loading);
    }

    /// Fetch both collections concurrently. Either both lists are replaced or
    /// neither is.
    pub async fn load_data(&mut self) -> Result<(), AdminPanelError> {
        self.set_loading(true);
        let result = tokio::try_join!(self.users.list_users(), self.recipes.list_recipes());
        self.set_loading(false);

        match result {
            Ok((users, recipes)) => {
                debug!(users = users.len(), recipes = recipes.len(), "panel data loaded");
                self.state.users = users;
                self.state.recipes = recipes;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch panel data");
                self.toasts.push(Toast::fetch_failed());
                Err(AdminPanelError::Fetch(err))
            }
        }
    }

    /// Open the dialog for `mode`. The form is seeded from `record` when one
    /// is given; an edit dialog without a record falls back to the cached
    /// copy of the record, and otherwise the empty template is used.
    pub fn open_modal(
        &mut self,
        mode: ModalMode,
        record: Option<FormValues>,
    ) -> Result<(), AdminPanelError> {
        let kind = mode.resource();
        let form = match record {
            Some(form) if form.resource() != kind => {
                return Err(DomainError::invariant(format!(
                    "{} form cannot seed the `{}` dialog",
                    form.resource(),
                    mode.title()
                ))
                .into());
            }
            Some(form) => form,
            None => mode
                .record_id()
                .and_then(|id| self.state.cached_form(kind, id))
                .unwrap_or_else(|| FormValues::empty(kind)),
        };

        debug!(dialog = %mode.title(), "dialog opened");
        self.state.modal = Some(Modal { mode, form });
        Ok(())
    }

    pub fn cancel_modal(&mut self) {
        self.state.modal = None;
    }

    /// Send the dialog's create or update request. On success the dialog
    /// closes and both lists are reloaded; on failure it stays open holding
    /// `form`.
    pub async fn submit(&mut self, form: FormValues) -> Result<(), AdminPanelError> {
        let Some(modal) = self.state.modal.as_mut() else {
            return Err(AdminPanelError::ModalClosed);
        };
        modal.form = form.clone();
        let mode = modal.mode.clone();

        if let Err(source) = self.send(&mode, &form).await {
            warn!(dialog = %mode.title(), error = %source, "dialog submit failed");
            self.toasts.push(Toast::save_failed(&mode));
            return Err(AdminPanelError::Submit {
                action: format!(
                    "{} {}",
                    mode.action().as_str(),
                    mode.resource().as_str()
                ),
                source,
            });
        }

        info!(dialog = %mode.title(), record = ?mode.record_id(), "dialog submitted");
        self.state.modal = None;
        self.toasts.push(Toast::saved(&mode));
        self.reload_after_write().await;
        Ok(())
    }

    async fn send(&self, mode: &ModalMode, form: &FormValues) -> Result<(), SubmitError> {
        match (mode, form) {
            (ModalMode::CreateUser, FormValues::User(user)) => {
                self.users.create_user(user.create_request()?).await?;
            }
            (ModalMode::EditUser { id }, FormValues::User(user)) => {
                self.users.update_user(id, user.update_request()?).await?;
            }
            (ModalMode::CreateRecipe, FormValues::Recipe(recipe)) => {
                self.recipes.create_recipe(recipe.create_request()?).await?;
            }
            (ModalMode::EditRecipe { id }, FormValues::Recipe(recipe)) => {
                self.recipes
                    .update_recipe(id, recipe.update_request()?)
                    .await?;
            }
            (mode, form) => {
                return Err(DomainError::invariant(format!(
                    "{} form submitted to the `{}` dialog",
                    form.resource(),
                    mode.title()
                ))
                .into());
            }
        }
        Ok(())
    }

    pub async fn delete_record(
        &mut self,
        id: &RecordId,
        kind: ResourceKind,
    ) -> Result<(), AdminPanelError> {
        let result = match kind {
            ResourceKind::User => self.users.delete_user(id).await,
            ResourceKind::Recipe => self.recipes.delete_recipe(id).await,
        };

        if let Err(source) = result {
            warn!(resource = %kind, record = %id, error = %source, "delete failed");
            self.toasts.push(Toast::delete_failed(kind));
            return Err(AdminPanelError::Delete { kind, source });
        }

        info!(resource = %kind, record = %id, "record deleted");
        self.toasts.push(Toast::deleted(kind));
        self.reload_after_write().await;
        Ok(())
    }

    /// Refresh both lists after a successful write. A failed reload keeps the
    /// previous lists and leaves its own toast; the write still succeeded.
    async fn reload_after_write(&mut self) {
        if let Err(err) = self.load_data().await {
            debug!(error = %err, "reload after write failed");
        }
    }

    /// Rows of the active tab on the 1-based `page`.
    pub fn visible_page(&self, page: usize) -> TabPage<'_> {
        match self.state.active_tab {
            Tab::Users => TabPage::Users(paginate(&self.state.users, page, self.page_size)),
            Tab::Recipes => TabPage::Recipes(paginate(&self.state.recipes, page, self.page_size)),
        }
    }
}
