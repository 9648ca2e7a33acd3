use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use yewdux::Store;

use i18n::LanguageType;

pub use forms::{DeleteConfirm, EditForm, Field, FormError};
pub use user_list::{ListView, LoadTicket, Modal, UserListState, FETCH_FAILED};

mod forms;
#[cfg(test)]
mod mock;
mod user_list;

/// language type
#[derive(Debug, Default, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct I18nState {
    pub lang: LanguageType,
}

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn from_flag(dark: bool) -> Self {
        if dark {
            ThemeState::Dark
        } else {
            ThemeState::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeState::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeState::Light => write!(f, "light"),
            ThemeState::Dark => write!(f, "dark"),
        }
    }
}

/// class names the rendering layer applies for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub muted: &'static str,
    pub modal: &'static str,
}

pub fn palette(theme: ThemeState) -> Palette {
    match theme {
        ThemeState::Light => Palette {
            page: "page light",
            card: "card light",
            muted: "muted light",
            modal: "modal light",
        },
        ThemeState::Dark => Palette {
            page: "page dark",
            card: "card dark",
            muted: "muted dark",
            modal: "modal dark",
        },
    }
}
