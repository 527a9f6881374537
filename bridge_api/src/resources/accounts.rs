//! Account endpoints.

use serde_json::Value;

use crate::{
    params::{Params, DEFAULT_LIMIT},
    Client, Error,
};

#[derive(Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a Client,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the accounts across all items of the token's user.
    pub async fn list(&self, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with_limit(DEFAULT_LIMIT)
            .with_access_token(access_token);
        self.client.get("/v2/accounts", params).await
    }

    pub async fn retrieve(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .get(&format!("/v2/accounts/{}", id), params)
            .await
    }
}
