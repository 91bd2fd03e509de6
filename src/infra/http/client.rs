//! reqwest-backed implementation of the backend traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Response, Url,
    header::{AUTHORIZATION, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use recipe_admin_api_types::{
    RecipeCreateRequest, RecipeUpdateRequest, UserCreateRequest, UserUpdateRequest,
};

use crate::application::repos::{RecipesRepo, RepoError, UsersRepo};
use crate::config::ApiSettings;
use crate::domain::entities::{Recipe, RecordId, User};
use crate::domain::types::ResourceKind;
use crate::infra::error::InfraError;

#[derive(Clone, Debug)]
pub struct RestClient {
    client: Client,
    base: Url,
    auth: Option<HeaderValue>,
}

impl RestClient {
    pub fn new(base: Url, token: Option<&str>, timeout: Duration) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;

        let auth = token
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|err| InfraError::configuration(format!("invalid api token: {err}")))?;
                value.set_sensitive(true);
                Ok::<_, InfraError>(value)
            })
            .transpose()?;

        Ok(Self {
            client,
            base: with_trailing_slash(base),
            auth,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, InfraError> {
        Self::new(
            settings.base_url.clone(),
            settings.token.as_deref(),
            settings.timeout,
        )
    }

    pub fn user_agent() -> &'static str {
        concat!("recipe-admin/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, RepoError> {
        self.base.join(path).map_err(RepoError::Url)
    }

    /// URL of one record below `kind`'s collection. The id is pushed as a
    /// single percent-encoded segment, so `/`, `?` and `#` stay inside it.
    pub fn item_url(&self, kind: ResourceKind, id: &RecordId) -> Result<Url, RepoError> {
        // `.` and `..` are dropped by the segment writer.
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(RepoError::InvalidId { id: id.to_string() });
        }

        let mut url = self.url(kind.collection_path())?;
        url.path_segments_mut()
            .map_err(|()| RepoError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(method = %method, url = %url, "backend request");
        let req = self.client.request(method, url);
        match &self.auth {
            Some(value) => req.header(AUTHORIZATION, value.clone()),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RepoError> {
        let url = self.url(path)?;
        let resp = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(RepoError::transport)?;
        Self::handle(resp).await
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<(), RepoError> {
        let resp = self
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(RepoError::transport)?;
        Self::ensure_success(resp).await
    }

    async fn send_empty(&self, method: Method, url: Url) -> Result<(), RepoError> {
        let resp = self
            .request(method, url)
            .send()
            .await
            .map_err(RepoError::transport)?;
        Self::ensure_success(resp).await
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, RepoError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(RepoError::transport)?;
        if !status.is_success() {
            return Err(RepoError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(RepoError::decode)
    }

    async fn ensure_success(resp: Response) -> Result<(), RepoError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RepoError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[async_trait]
impl UsersRepo for RestClient {
    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        self.get_json(ResourceKind::User.list_path()).await
    }

    async fn create_user(&self, params: UserCreateRequest) -> Result<(), RepoError> {
        let url = self.url(ResourceKind::User.collection_path())?;
        self.send_json(Method::POST, url, &params).await
    }

    async fn update_user(
        &self,
        id: &RecordId,
        params: UserUpdateRequest,
    ) -> Result<(), RepoError> {
        let url = self.item_url(ResourceKind::User, id)?;
        self.send_json(Method::PUT, url, &params).await
    }

    async fn delete_user(&self, id: &RecordId) -> Result<(), RepoError> {
        let url = self.item_url(ResourceKind::User, id)?;
        self.send_empty(Method::DELETE, url).await
    }
}

#[async_trait]
impl RecipesRepo for RestClient {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RepoError> {
        self.get_json(ResourceKind::Recipe.list_path()).await
    }

    async fn create_recipe(&self, params: RecipeCreateRequest) -> Result<(), RepoError> {
        let url = self.url(ResourceKind::Recipe.collection_path())?;
        self.send_json(Method::POST, url, &params).await
    }

    async fn update_recipe(
        &self,
        id: &RecordId,
        params: RecipeUpdateRequest,
    ) -> Result<(), RepoError> {
        let url = self.item_url(ResourceKind::Recipe, id)?;
        self.send_json(Method::PUT, url, &params).await
    }

    async fn delete_recipe(&self, id: &RecordId) -> Result<(), RepoError> {
        let url = self.item_url(ResourceKind::Recipe, id)?;
        self.send_empty(Method::DELETE, url).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn client(server: &MockServer, token: Option<&str>) -> RestClient {
        let base = Url::parse(&server.base_url()).expect("base url");
        RestClient::new(base, token, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn base_gets_trailing_slash_and_keeps_prefix() {
        let base = Url::parse("http://backend.test/api").expect("url");
        let client = RestClient::new(base, None, Duration::from_secs(1)).expect("client");
        assert_eq!(
            client.url("users").expect("join").as_str(),
            "http://backend.test/api/users"
        );
    }

    #[test]
    fn item_url_keeps_the_id_in_one_segment() {
        let base = Url::parse("http://backend.test/api/").expect("url");
        let client = RestClient::new(base, None, Duration::from_secs(1)).expect("client");

        let url = client
            .item_url(ResourceKind::User, &RecordId::new("../recipes/r1?x#y"))
            .expect("item url");
        assert_eq!(
            url.as_str(),
            "http://backend.test/api/users/..%2Frecipes%2Fr1%3Fx%23y"
        );

        for id in ["", ".", ".."] {
            let err = client
                .item_url(ResourceKind::Recipe, &RecordId::new(id))
                .expect_err("dot segments are rejected");
            assert!(matches!(err, RepoError::InvalidId { .. }), "{id:?}");
        }
    }

    #[test]
    fn invalid_token_is_a_configuration_error() {
        let base = Url::parse("http://backend.test/").expect("url");
        let err = RestClient::new(base, Some("bad\ntoken"), Duration::from_secs(1))
            .expect_err("newline in header");
        assert!(matches!(err, InfraError::Configuration { .. }));
    }

    #[tokio::test]
    async fn list_recipes_reads_singular_route() -> Result<(), RepoError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/recipe");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"_id":"r1","title":"Soup","recipeImg":"https://img.example/soup.png","creator":{"_id":"1","name":"A"}}]"#);
        });

        let recipes = client(&server, None).list_recipes().await?;
        mock.assert();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id.as_str(), "r1");
        assert_eq!(recipes[0].creator_name(), "A");
        Ok(())
    }

    #[tokio::test]
    async fn token_is_sent_as_bearer() -> Result<(), RepoError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/users")
                .header("authorization", "Bearer admin-token");
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });

        let users = client(&server, Some("admin-token")).list_users().await?;
        mock.assert();
        assert!(users.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_user_posts_json_body() -> Result<(), RepoError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/users").json_body(json!({
                "name": "A",
                "email": "a@x.com",
                "password": "secret"
            }));
            then.status(201)
                .header("content-type", "application/json")
                .body(r#"{"_id":"1","name":"A","email":"a@x.com"}"#);
        });

        client(&server, None)
            .create_user(UserCreateRequest {
                name: "A".into(),
                email: "a@x.com".into(),
                password: "secret".into(),
            })
            .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn update_recipe_puts_to_item_route() -> Result<(), RepoError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT").path("/recipes/r1").json_body(json!({
                "title": "Stew",
                "recipeImg": "https://img.example/stew.png"
            }));
            then.status(200).body("{}");
        });

        client(&server, None)
            .update_recipe(
                &RecordId::new("r1"),
                RecipeUpdateRequest {
                    title: "Stew".into(),
                    image_url: "https://img.example/stew.png".into(),
                },
            )
            .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn delete_routes_use_plural_collections() -> Result<(), RepoError> {
        let server = MockServer::start();
        let users = server.mock(|when, then| {
            when.method("DELETE").path("/users/1");
            then.status(204);
        });
        let recipes = server.mock(|when, then| {
            when.method("DELETE").path("/recipes/r1");
            then.status(200);
        });

        let client = client(&server, None);
        client.delete_user(&RecordId::new("1")).await?;
        client.delete_recipe(&RecordId::new("r1")).await?;
        users.assert();
        recipes.assert();
        Ok(())
    }

    #[tokio::test]
    async fn delete_escapes_slashes_in_the_id() -> Result<(), RepoError> {
        let server = MockServer::start();
        let slash = server.mock(|when, then| {
            when.method("DELETE").path("/users/a%2Fb");
            then.status(204);
        });
        let traversal = server.mock(|when, then| {
            when.method("DELETE").path("/users/..%2Frecipes%2Fr1");
            then.status(204);
        });

        let client = client(&server, None);
        client.delete_user(&RecordId::new("a/b")).await?;
        client.delete_user(&RecordId::new("../recipes/r1")).await?;

        slash.assert();
        traversal.assert();
        Ok(())
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("DELETE").path("/users/9");
            then.status(404).body("no such user");
        });

        let err = client(&server, None)
            .delete_user(&RecordId::new("9"))
            .await
            .expect_err("404");
        match err {
            RepoError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such user");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_list_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/users");
            then.status(200).body(r#"{"not":"a list"}"#);
        });

        let err = client(&server, None)
            .list_users()
            .await
            .expect_err("object instead of list");
        assert!(matches!(err, RepoError::Decode(_)));
    }
}
