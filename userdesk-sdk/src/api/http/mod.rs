use async_trait::async_trait;
use gloo_net::http::{RequestBuilder, Response};

pub use auth::*;
pub use user::*;

use crate::config::{ApiConfig, API_KEY_HEADER};
use crate::error::{ApiError, Error, Result};

mod auth;
mod user;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        let status = self.status();
        if (200..=299).contains(&status) {
            Ok(self)
        } else {
            // deserialize error
            let err = self
                .json::<ApiError>()
                .await
                .map(|err| err.with_status(status))
                .unwrap_or(ApiError::unknown(status));
            Err(Error::Network(err))
        }
    }
}

/// attach the api key header when one is configured
fn with_api_key(config: &ApiConfig, builder: RequestBuilder) -> RequestBuilder {
    match &config.api_key {
        Some(key) => builder.header(API_KEY_HEADER, key),
        None => builder,
    }
}
