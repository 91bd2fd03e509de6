//! Form values edited in the shared dialog and the checks applied before a
//! request is sent.

use url::Url;

use recipe_admin_api_types::{
    RecipeCreateRequest, RecipeUpdateRequest, UserCreateRequest, UserUpdateRequest,
};

use crate::domain::entities::{Recipe, User};
use crate::domain::error::DomainError;
use crate::domain::types::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Only collected when adding a user.
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeForm {
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValues {
    User(UserForm),
    Recipe(RecipeForm),
}

impl FormValues {
    /// Empty template used when a create dialog opens.
    pub fn empty(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::User => FormValues::User(UserForm::default()),
            ResourceKind::Recipe => FormValues::Recipe(RecipeForm::default()),
        }
    }

    pub fn resource(&self) -> ResourceKind {
        match self {
            FormValues::User(_) => ResourceKind::User,
            FormValues::Recipe(_) => ResourceKind::Recipe,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FormValues::User(form) => *form == UserForm::default(),
            FormValues::Recipe(form) => *form == RecipeForm::default(),
        }
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: None,
        }
    }
}

impl From<&Recipe> for RecipeForm {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            image_url: recipe.image_url.clone(),
        }
    }
}

impl From<&User> for FormValues {
    fn from(user: &User) -> Self {
        FormValues::User(user.into())
    }
}

impl From<&Recipe> for FormValues {
    fn from(recipe: &Recipe) -> Self {
        FormValues::Recipe(recipe.into())
    }
}

impl UserForm {
    pub fn create_request(&self) -> Result<UserCreateRequest, DomainError> {
        let UserUpdateRequest { name, email } = self.update_request()?;
        let password = self
            .password
            .as_deref()
            .filter(|password| !password.is_empty())
            .ok_or_else(|| DomainError::validation("`password` is required"))?;

        Ok(UserCreateRequest {
            name,
            email,
            password: password.to_string(),
        })
    }

    /// The password is never part of an update.
    pub fn update_request(&self) -> Result<UserUpdateRequest, DomainError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        ensure_email(&email)?;
        Ok(UserUpdateRequest { name, email })
    }
}

impl RecipeForm {
    pub fn create_request(&self) -> Result<RecipeCreateRequest, DomainError> {
        let (title, image_url) = self.checked()?;
        Ok(RecipeCreateRequest { title, image_url })
    }

    pub fn update_request(&self) -> Result<RecipeUpdateRequest, DomainError> {
        let (title, image_url) = self.checked()?;
        Ok(RecipeUpdateRequest { title, image_url })
    }

    fn checked(&self) -> Result<(String, String), DomainError> {
        let title = required(&self.title, "title")?;
        let image_url = required(&self.image_url, "image_url")?;
        Url::parse(&image_url)
            .map_err(|err| DomainError::validation(format!("`image_url` is not a URL: {err}")))?;
        Ok((title, image_url))
    }
}

fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("`{field}` is required")));
    }
    Ok(trimmed.to_string())
}

fn ensure_email(email: &str) -> Result<(), DomainError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "`email` is not a valid address: {email}"
        )))
    }
}
