use gloo_net::http::Request;

use crate::api::auth::AuthApi;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::user::{LoginRequest, LoginResp};

use super::{with_api_key, RespStatus};

pub struct AuthHttp {
    config: ApiConfig,
}

impl AuthHttp {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for AuthHttp {
    async fn sign_in(&self, req: LoginRequest) -> Result<LoginResp> {
        let resp: LoginResp = with_api_key(&self.config, Request::post(&self.config.url("login")))
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }
}
