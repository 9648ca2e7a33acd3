use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use userdesk_sdk::state::{palette, ThemeState};
use utils::tr;

use crate::bundle_for;

#[derive(Properties, Clone, PartialEq)]
pub struct PagerProps {
    pub current: u32,
    pub total: u32,
    pub lang: LanguageType,
    pub theme: ThemeState,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// previous / next buttons, disabled at the first and last page
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let i18n = use_memo(props.lang, |lang| {
        bundle_for(*lang, en_us::USER_LIST, zh_cn::USER_LIST)
    });
    let palette = palette(props.theme);
    let at_first = props.current <= 1;
    let at_last = props.current >= props.total;

    html! {
        <div class="pager">
            <button
                class={classes!("primary", at_first.then_some("disabled"))}
                disabled={at_first}
                onclick={props.on_prev.reform(|_| ())}>
                {tr!(i18n, "previous")}
            </button>
            <span class={palette.muted}>
                {tr!(i18n, "page_of", "current" => props.current, "total" => props.total)}
            </span>
            <button
                class={classes!("primary", at_last.then_some("disabled"))}
                disabled={at_last}
                onclick={props.on_next.reform(|_| ())}>
                {tr!(i18n, "next")}
            </button>
        </div>
    }
}
