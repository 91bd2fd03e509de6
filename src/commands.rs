use serde::Serialize;

use recipe_admin::{
    application::{admin::AdminPanelController, error::AppError},
    config::{RecipesCommand, UsersCommand},
    domain::{
        entities::RecordId,
        forms::{FormValues, RecipeForm, UserForm},
        types::{ModalMode, ResourceKind, Tab},
    },
    presentation::admin::views::AdminPanelView,
};

pub async fn users(panel: &mut AdminPanelController, cmd: UsersCommand) -> Result<(), AppError> {
    match cmd {
        UsersCommand::List { page } => list(panel, Tab::Users, page).await,
        UsersCommand::Add {
            name,
            email,
            password,
        } => {
            panel.open_modal(ModalMode::create(ResourceKind::User), None)?;
            let form = UserForm {
                name,
                email,
                password: Some(password),
            };
            panel.submit(FormValues::User(form)).await?;
            Ok(())
        }
        UsersCommand::Edit { id, name, email } => {
            let id = RecordId::from(id);
            let mut form = match open_edit(panel, ResourceKind::User, id).await? {
                FormValues::User(form) => form,
                FormValues::Recipe(_) => {
                    return Err(AppError::unexpected("user dialog opened with a recipe form"));
                }
            };
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            panel.submit(FormValues::User(form)).await?;
            Ok(())
        }
        UsersCommand::Delete { id } => {
            panel
                .delete_record(&RecordId::from(id), ResourceKind::User)
                .await?;
            Ok(())
        }
    }
}

pub async fn recipes(
    panel: &mut AdminPanelController,
    cmd: RecipesCommand,
) -> Result<(), AppError> {
    match cmd {
        RecipesCommand::List { page } => list(panel, Tab::Recipes, page).await,
        RecipesCommand::Add { title, image_url } => {
            panel.open_modal(ModalMode::create(ResourceKind::Recipe), None)?;
            let form = RecipeForm { title, image_url };
            panel.submit(FormValues::Recipe(form)).await?;
            Ok(())
        }
        RecipesCommand::Edit {
            id,
            title,
            image_url,
        } => {
            let id = RecordId::from(id);
            let mut form = match open_edit(panel, ResourceKind::Recipe, id).await? {
                FormValues::Recipe(form) => form,
                FormValues::User(_) => {
                    return Err(AppError::unexpected("recipe dialog opened with a user form"));
                }
            };
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(image_url) = image_url {
                form.image_url = image_url;
            }
            panel.submit(FormValues::Recipe(form)).await?;
            Ok(())
        }
        RecipesCommand::Delete { id } => {
            panel
                .delete_record(&RecordId::from(id), ResourceKind::Recipe)
                .await?;
            Ok(())
        }
    }
}

async fn list(panel: &mut AdminPanelController, tab: Tab, page: usize) -> Result<(), AppError> {
    panel.set_active_tab(tab);
    panel.load_data().await?;
    print_json(&AdminPanelView::from(panel.visible_page(page)))
}

/// Load the panel, then open the edit dialog seeded with the cached record.
async fn open_edit(
    panel: &mut AdminPanelController,
    kind: ResourceKind,
    id: RecordId,
) -> Result<FormValues, AppError> {
    panel.load_data().await?;
    let Some(seed) = panel.state().cached_form(kind, &id) else {
        return Err(AppError::not_found(id.to_string()));
    };
    panel.open_modal(ModalMode::edit(kind, id), Some(seed.clone()))?;
    Ok(seed)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::unexpected(format!("failed to render output: {e}")))?;
    println!("{out}");
    Ok(())
}
