use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use httpmock::MockServer;
use recipe_admin::application::admin::{AdminPanelController, AdminPanelError, Toast};
use recipe_admin::domain::entities::{RecordId, User};
use recipe_admin::domain::forms::{FormValues, RecipeForm, UserForm};
use recipe_admin::domain::types::{ModalMode, ResourceKind};
use recipe_admin::infra::http::RestClient;
use serde_json::json;
use url::Url;

fn panel(server: &MockServer) -> AdminPanelController {
    let base = Url::parse(&server.base_url()).expect("base url");
    let client = Arc::new(RestClient::new(base, None, Duration::from_secs(5)).expect("client"));
    AdminPanelController::new(
        client.clone(),
        client,
        NonZeroUsize::new(5).expect("page size"),
    )
}

#[tokio::test]
async fn delete_then_reload_yields_list_without_record() {
    let server = MockServer::start();
    let mut seeded_users = server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([{"_id": "1", "name": "A", "email": "a@x.com"}]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/recipe");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let mut panel = panel(&server);
    panel.load_data().await.expect("initial load");
    assert_eq!(
        panel.state().users,
        vec![User {
            id: RecordId::new("1"),
            name: "A".into(),
            email: "a@x.com".into(),
        }]
    );

    let delete = server.mock(|when, then| {
        when.method("DELETE").path("/users/1");
        then.status(200);
    });
    seeded_users.delete();
    server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    panel
        .delete_record(&RecordId::new("1"), ResourceKind::User)
        .await
        .expect("delete");
    panel.load_data().await.expect("reload");

    delete.assert();
    assert!(panel.state().users.is_empty());
    assert_eq!(
        panel.drain_toasts(),
        vec![Toast::success("User deleted successfully")]
    );
}

#[tokio::test]
async fn failed_fetch_leaves_previous_lists() {
    let server = MockServer::start();
    let mut users = server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200)
            .json_body(json!([{"_id": "1", "name": "A", "email": "a@x.com"}]));
    });
    let mut recipes = server.mock(|when, then| {
        when.method("GET").path("/recipe");
        then.status(200).json_body(json!([{
            "_id": "r1",
            "title": "Soup",
            "recipeImg": "https://img.example/soup.png",
            "creator": {"_id": "1", "name": "A"}
        }]));
    });

    let mut panel = panel(&server);
    panel.load_data().await.expect("initial load");

    users.delete();
    recipes.delete();
    server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/recipe");
        then.status(500).body("database offline");
    });

    let err = panel.load_data().await.expect_err("recipes fail");

    assert!(matches!(err, AdminPanelError::Fetch(_)));
    assert_eq!(panel.state().users.len(), 1);
    assert_eq!(panel.state().recipes.len(), 1);
    assert!(!panel.state().loading);
    assert_eq!(panel.drain_toasts(), vec![Toast::error("Failed to fetch data")]);
}

#[tokio::test]
async fn edit_user_updates_dialog_record_and_reloads() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200)
            .json_body(json!([{"_id": "1", "name": "A", "email": "a@x.com"}]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/recipe");
        then.status(200).json_body(json!([]));
    });
    let update = server.mock(|when, then| {
        when.method("PUT")
            .path("/users/1")
            .json_body(json!({"name": "Renamed", "email": "a@x.com"}));
        then.status(200)
            .json_body(json!({"_id": "1", "name": "Renamed", "email": "a@x.com"}));
    });

    let mut panel = panel(&server);
    panel.load_data().await.expect("load");
    panel
        .open_modal(ModalMode::edit(ResourceKind::User, RecordId::new("1")), None)
        .expect("open");

    panel
        .submit(FormValues::User(UserForm {
            name: "Renamed".into(),
            email: "a@x.com".into(),
            password: None,
        }))
        .await
        .expect("submit");

    update.assert();
    assert!(panel.modal().is_none());
    assert_eq!(
        panel.drain_toasts(),
        vec![Toast::success("Edit User successful")]
    );
}

#[tokio::test]
async fn rejected_create_keeps_dialog_open() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST").path("/recipes");
        then.status(422).body("title already used");
    });

    let mut panel = panel(&server);
    panel
        .open_modal(ModalMode::CreateRecipe, None)
        .expect("open");
    let entered = FormValues::Recipe(RecipeForm {
        title: "Soup".into(),
        image_url: "https://img.example/soup.png".into(),
    });

    let err = panel.submit(entered.clone()).await.expect_err("rejected");

    create.assert();
    assert_eq!(err.to_string(), "failed to add recipe");
    let modal = panel.modal().expect("dialog open");
    assert_eq!(modal.form, entered);
    assert_eq!(panel.drain_toasts(), vec![Toast::error("Failed to add recipe")]);
}

#[tokio::test]
async fn numeric_backend_ids_load_and_delete() {
    let server = MockServer::start();
    let mut seeded_users = server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200)
            .json_body(json!([{"id": 1, "name": "A", "email": "a@x.com"}]));
    });
    server.mock(|when, then| {
        when.method("GET").path("/recipe");
        then.status(200).json_body(json!([]));
    });

    let mut panel = panel(&server);
    panel.load_data().await.expect("numeric ids decode");
    let id = panel.state().users[0].id.clone();
    assert_eq!(id, RecordId::new("1"));

    let delete = server.mock(|when, then| {
        when.method("DELETE").path("/users/1");
        then.status(200);
    });
    seeded_users.delete();
    server.mock(|when, then| {
        when.method("GET").path("/users");
        then.status(200).json_body(json!([]));
    });

    panel
        .delete_record(&id, ResourceKind::User)
        .await
        .expect("delete");

    delete.assert();
    assert!(panel.state().users.is_empty());
}

#[tokio::test]
async fn user_delete_cannot_reach_recipe_routes() {
    let server = MockServer::start();
    let user_delete = server.mock(|when, then| {
        when.method("DELETE").path("/users/..%2Frecipes%2Fr1");
        then.status(404).body("no such user");
    });

    let mut panel = panel(&server);
    let err = panel
        .delete_record(&RecordId::new("../recipes/r1"), ResourceKind::User)
        .await
        .expect_err("unknown user");

    user_delete.assert();
    assert_eq!(err.to_string(), "failed to delete user");
    assert_eq!(
        panel.drain_toasts(),
        vec![Toast::error("Failed to delete user")]
    );
}
