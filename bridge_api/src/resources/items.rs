//! Item endpoints. An item is one bank connection of a user.

use serde_json::Value;

use crate::{
    params::{Params, DEFAULT_LIMIT},
    Client, Error,
};

/// Bank connections of the user owning the access token.
#[derive(Clone, Copy)]
pub struct Items<'a> {
    client: &'a Client,
}

impl<'a> Items<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Starts connecting a bank. `redirect_url` is left out of the request
    /// when not given.
    pub async fn connect(
        &self,
        bank_id: i64,
        access_token: &str,
        redirect_url: Option<&str>,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with("bank_id", bank_id)
            .with_access_token(access_token)
            .with_opt("redirect_url", redirect_url);
        self.client.post("/v2/items/connect", params).await
    }

    pub async fn list(&self, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with_limit(DEFAULT_LIMIT)
            .with_access_token(access_token);
        self.client.get("/v2/items", params).await
    }

    pub async fn retrieve(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .get(&format!("/v2/items/{}", id), params)
            .await
    }

    /// Synchronisation status of an item.
    pub async fn status(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .get(&format!("/v2/items/{}/status", id), params)
            .await
    }

    /// Asks the API to synchronise an item with its bank.
    pub async fn refresh(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .post(&format!("/v2/items/{}/refresh", id), params)
            .await
    }

    /// Progress of the last refresh.
    pub async fn refresh_status(
        &self,
        id: i64,
        access_token: &str,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .get(&format!("/v2/items/{}/refresh", id), params)
            .await
    }

    pub async fn delete(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .delete(&format!("/v2/items/{}", id), params)
            .await
    }
}
