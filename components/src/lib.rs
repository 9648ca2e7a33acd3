use fluent::{FluentBundle, FluentResource};

use i18n::{en_us, zh_cn, LanguageType};

pub mod delete_modal;
pub mod edit_modal;
pub mod notification;
pub mod pager;
pub mod user_card;

/// pick the resource for `lang` and build its bundle
pub fn bundle_for(lang: LanguageType, en: &str, zh: &str) -> FluentBundle<FluentResource> {
    let res = match lang {
        LanguageType::ZhCN => zh,
        LanguageType::EnUS => en,
    };
    utils::create_bundle(res)
}

pub fn form_error_bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    bundle_for(lang, en_us::FORM_ERROR, zh_cn::FORM_ERROR)
}
