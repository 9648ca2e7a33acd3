use crate::config::ApiConfig;

use self::{
    auth::AuthApi,
    http::{AuthHttp, UserHttp},
    user::UserApi,
};

pub mod auth;
pub mod http;
pub mod user;

pub fn users() -> Box<dyn UserApi> {
    Box::new(UserHttp::new(ApiConfig::default()))
}

pub fn auth() -> Box<dyn AuthApi> {
    Box::new(AuthHttp::new(ApiConfig::default()))
}
