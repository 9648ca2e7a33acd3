use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use userdesk_sdk::model::user::User;
use userdesk_sdk::state::{palette, ThemeState};
use utils::tr;

use crate::bundle_for;

#[derive(Properties, Clone, PartialEq)]
pub struct UserCardProps {
    pub user: User,
    pub lang: LanguageType,
    pub theme: ThemeState,
    pub on_edit: Callback<User>,
    pub on_delete: Callback<User>,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let i18n = use_memo(props.lang, |lang| {
        bundle_for(*lang, en_us::USER_LIST, zh_cn::USER_LIST)
    });
    let palette = palette(props.theme);
    let user = &props.user;
    let name = user.full_name();

    let on_edit = {
        let user = user.clone();
        props.on_edit.reform(move |_: MouseEvent| user.clone())
    };
    let on_delete = {
        let user = user.clone();
        props.on_delete.reform(move |_: MouseEvent| user.clone())
    };

    html! {
        <div class={palette.card}>
            <img class="card-avatar" src={user.avatar.clone()} alt={name.clone()}/>
            <div class="card-body">
                <h2>{name}</h2>
                <p class={palette.muted}>{&user.email}</p>
            </div>
            <div class="card-actions">
                <button class="primary" onclick={on_edit}>{tr!(i18n, "edit")}</button>
                <button class="danger" onclick={on_delete}>{tr!(i18n, "delete")}</button>
            </div>
        </div>
    }
}
