use crate::{
    error::Result,
    model::user::{LoginRequest, LoginResp},
};

#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    async fn sign_in(&self, req: LoginRequest) -> Result<LoginResp>;
}
