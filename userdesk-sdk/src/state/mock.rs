use std::cell::RefCell;

use crate::api::user::UserApi;
use crate::error::{Error, Result};
use crate::model::user::{User, UserPage, UserUpdate};

pub fn user(id: u32) -> User {
    User {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@reqres.in"),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

/// in-memory user service serving `total` users, `per_page` at a time
#[derive(Default)]
pub struct MockUsers {
    total: u32,
    per_page: u32,
    fail: RefCell<Option<Error>>,
    pub updates: RefCell<Vec<(u32, UserUpdate)>>,
    pub deletes: RefCell<Vec<u32>>,
}

impl MockUsers {
    pub fn new(total: u32, per_page: u32) -> Self {
        Self {
            total,
            per_page,
            ..Default::default()
        }
    }

    /// the next call fails with `err`
    pub fn fail_next(&self, err: Error) {
        *self.fail.borrow_mut() = Some(err);
    }

    fn check(&self) -> Result<()> {
        match self.fail.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UserApi for MockUsers {
    async fn list(&self, page: u32) -> Result<UserPage> {
        self.check()?;
        let first = (page - 1) * self.per_page + 1;
        let last = (page * self.per_page).min(self.total);
        Ok(UserPage {
            page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total.div_ceil(self.per_page),
            data: (first..=last).map(user).collect(),
        })
    }

    async fn update(&self, id: u32, user: UserUpdate) -> Result<()> {
        self.check()?;
        self.updates.borrow_mut().push((id, user));
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<()> {
        self.check()?;
        self.deletes.borrow_mut().push(id);
        Ok(())
    }
}
