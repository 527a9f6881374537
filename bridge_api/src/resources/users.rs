//! User endpoints.

use reqwest::Method;
use serde_json::Value;

use crate::{
    params::{Params, DEFAULT_LIMIT},
    Client, Error,
};

/// User management: sign up, authentication, password changes, deletion.
///
/// User UUIDs are percent-encoded as a single path segment, so a value
/// holding `/` or `?` cannot reach another endpoint.
#[derive(Clone, Copy)]
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a user.
    pub async fn create(&self, email: &str, password: &str) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with("email", email)
            .with("password", password);
        self.client.post("/v2/users", params).await
    }

    /// Authenticates a user. The response carries the user's access token.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with("email", email)
            .with("password", password);
        self.client.post("/v2/authenticate", params).await
    }

    /// Invalidates an access token.
    pub async fn logout(&self, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client.post("/v2/logout", params).await
    }

    /// Lists the application's users.
    pub async fn list(&self) -> Result<Option<Value>, Error> {
        let params = Params::new().with_limit(DEFAULT_LIMIT);
        self.client.get("/v2/users", params).await
    }

    pub async fn retrieve(&self, uuid: &str) -> Result<Option<Value>, Error> {
        self.client
            .request_endpoint(Method::GET, &["v2", "users", uuid], Params::new())
            .await
    }

    /// Changes a user's password.
    pub async fn edit(
        &self,
        uuid: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with("current_password", current_password)
            .with("new_password", new_password);
        self.client
            .request_endpoint(Method::PUT, &["v2", "users", uuid, "password"], params)
            .await
    }

    pub async fn delete(&self, uuid: &str, password: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with("password", password);
        self.client
            .request_endpoint(Method::DELETE, &["v2", "users", uuid], params)
            .await
    }

    /// Deletes every user. Only honoured by the sandbox environment.
    pub async fn delete_all(&self) -> Result<Option<Value>, Error> {
        self.client.delete("/v2/users", Params::new()).await
    }
}
