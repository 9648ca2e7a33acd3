//! only a handful of screens need translating,
//! so every resource is a plain fluent string per language
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod en_us;
pub mod zh_cn;

/// i18n language type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    ZhCN,
    #[default]
    EnUS,
}

impl Display for LanguageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageType::ZhCN => write!(f, "zh_cn"),
            LanguageType::EnUS => write!(f, "en_us"),
        }
    }
}

impl From<&str> for LanguageType {
    fn from(value: &str) -> Self {
        match value {
            "zh_cn" => LanguageType::ZhCN,
            _ => LanguageType::EnUS,
        }
    }
}
