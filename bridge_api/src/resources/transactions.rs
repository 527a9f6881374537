//! Transaction endpoints.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::{
    params::{iso_datetime, Params, DEFAULT_LIMIT},
    Client, Error,
};

/// Transactions of the token's user. Date bounds are sent as ISO-8601.
#[derive(Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a Client,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists transactions dated up to `until`.
    pub async fn list(
        &self,
        until: &NaiveDateTime,
        access_token: &str,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with_limit(DEFAULT_LIMIT)
            .with("until", iso_datetime(until))
            .with_access_token(access_token);
        self.client.get("/v2/transactions", params).await
    }

    /// Lists transactions created or modified since `since`.
    pub async fn list_updated(
        &self,
        since: &NaiveDateTime,
        access_token: &str,
    ) -> Result<Option<Value>, Error> {
        let params = Params::new()
            .with_limit(DEFAULT_LIMIT)
            .with("since", iso_datetime(since))
            .with_access_token(access_token);
        self.client.get("/v2/transactions/updated", params).await
    }

    pub async fn retrieve(&self, id: i64, access_token: &str) -> Result<Option<Value>, Error> {
        let params = Params::new().with_access_token(access_token);
        self.client
            .get(&format!("/v2/transactions/{}", id), params)
            .await
    }
}
