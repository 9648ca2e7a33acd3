use std::sync::atomic::{AtomicI64, Ordering};

use yew::AttrValue;
use yewdux::{Dispatch, Store};

use crate::error::Error;

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// toasts are keyed by id, so two raised in the same millisecond must not collide
fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub id: i64,
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
    pub error: Option<Error>,
}

impl Notification {
    pub fn info(content: impl ToString) -> Self {
        Self {
            id: next_id(),
            content: content.to_string().into(),
            type_: NotificationType::Info,
            delay: 3000,
            error: None,
        }
    }

    /// `content` is the sentence shown to the user, `err` is kept for the log
    pub fn error(content: impl ToString, err: Error) -> Self {
        Self {
            id: next_id(),
            content: content.to_string().into(),
            type_: NotificationType::Error,
            delay: 5000,
            error: Some(err),
        }
    }

    pub fn notify(self) {
        if let Some(err) = &self.error {
            log::error!("{}: {}", self.content, err);
        }
        Dispatch::<Notification>::global().set(self);
    }

    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub enum NotificationType {
    #[default]
    Info,
    Error,
}
