use gloo_net::http::Request;

use crate::api::user::UserApi;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::user::{UserPage, UserUpdate};

use super::{with_api_key, RespStatus};

pub struct UserHttp {
    config: ApiConfig,
}

impl UserHttp {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl UserApi for UserHttp {
    async fn list(&self, page: u32) -> Result<UserPage> {
        let url = self.config.url(&format!("users?page={page}"));
        log::debug!("fetch users: {url}");
        let page: UserPage = with_api_key(&self.config, Request::get(&url))
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(page)
    }

    async fn update(&self, id: u32, user: UserUpdate) -> Result<()> {
        let url = self.config.url(&format!("users/{id}"));
        log::debug!("update user {id}: {:?}", user);
        with_api_key(&self.config, Request::put(&url))
            .json(&user)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<()> {
        let url = self.config.url(&format!("users/{id}"));
        log::debug!("delete user {id}");
        with_api_key(&self.config, Request::delete(&url))
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
