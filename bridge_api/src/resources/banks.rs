//! Bank endpoints.

use serde_json::Value;

use crate::{
    params::{Params, DEFAULT_LIMIT},
    Client, Error,
};

/// Supported banks. These calls only need the application credentials.
#[derive(Clone, Copy)]
pub struct Banks<'a> {
    client: &'a Client,
}

impl<'a> Banks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Option<Value>, Error> {
        let params = Params::new().with_limit(DEFAULT_LIMIT);
        self.client.get("/v2/banks", params).await
    }

    pub async fn retrieve(&self, id: i64) -> Result<Option<Value>, Error> {
        self.client
            .get(&format!("/v2/banks/{}", id), Params::new())
            .await
    }
}
