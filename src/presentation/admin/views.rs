use std::fmt;

use serde::Serialize;

use crate::application::admin::{TabPage, Toast};
use crate::application::pagination::Page;
use crate::domain::entities::{Recipe, User};
use crate::domain::types::Tab;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUserRowView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for AdminUserRowView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminRecipeRowView {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub created_by: String,
}

impl From<&Recipe> for AdminRecipeRowView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            image_url: recipe.image_url.clone(),
            title: recipe.title.clone(),
            created_by: recipe.creator_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminListView<T> {
    pub heading: &'static str,
    pub page: usize,
    pub page_count: usize,
    pub has_next: bool,
    pub total: usize,
    pub rows: Vec<T>,
}

impl<T> AdminListView<T> {
    fn from_page<R>(tab: Tab, page: &Page<'_, R>) -> Self
    where
        for<'r> T: From<&'r R>,
    {
        Self {
            heading: tab.heading(),
            page: page.page,
            page_count: page.page_count(),
            has_next: page.has_next(),
            total: page.total,
            rows: page.items.iter().map(T::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AdminPanelView {
    Users(AdminListView<AdminUserRowView>),
    Recipes(AdminListView<AdminRecipeRowView>),
}

impl From<TabPage<'_>> for AdminPanelView {
    fn from(page: TabPage<'_>) -> Self {
        match page {
            TabPage::Users(page) => {
                AdminPanelView::Users(AdminListView::from_page(Tab::Users, &page))
            }
            TabPage::Recipes(page) => {
                AdminPanelView::Recipes(AdminListView::from_page(Tab::Recipes, &page))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToastItem {
    pub kind: &'static str,
    pub text: String,
}

impl From<&Toast> for AdminToastItem {
    fn from(toast: &Toast) -> Self {
        Self {
            kind: toast.kind.as_str(),
            text: toast.text.clone(),
        }
    }
}

impl fmt::Display for AdminToastItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}
