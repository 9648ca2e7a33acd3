use crate::{
    error::Result,
    model::user::{UserPage, UserUpdate},
};

/// the remote user service
#[async_trait::async_trait(?Send)]
pub trait UserApi {
    /// fetch one page of users, pages start at 1
    async fn list(&self, page: u32) -> Result<UserPage>;

    /// only success or failure matters, the echoed body is discarded
    async fn update(&self, id: u32, user: UserUpdate) -> Result<()>;

    async fn delete(&self, id: u32) -> Result<()>;
}
