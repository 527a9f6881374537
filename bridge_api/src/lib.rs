//! Client for the Bridge (Bankin') aggregation API.
//!
//! A [`Client`] signs every request with the application credentials and
//! decodes the JSON answer. Endpoints are grouped by resource:
//!
//! ```no_run
//! # async fn run() -> Result<(), bridge_api::Error> {
//! let client = bridge_api::Client::new("client-id", "client-secret")?;
//! let auth = client.users().authenticate("user@example.com", "password").await?;
//! let token = auth
//!     .as_ref()
//!     .and_then(|body| body["access_token"].as_str())
//!     .unwrap_or_default();
//! let items = client.items().list(token).await?;
//! println!("{:?}", items);
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod params;
pub mod resources;
pub use self::client::{
    decode_body, Client, PreparedRequest, CLIENT_VERSION, DEFAULT_API_ROOT, DEFAULT_TIMEOUT,
};
pub use self::errors::{ApiError, Error, REQUEST_ERROR_CODE, REQUEST_ERROR_TITLE};
pub use self::params::{iso_datetime, Params, DEFAULT_LIMIT};
pub use reqwest::Method;
