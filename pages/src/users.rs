use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use components::bundle_for;
use components::delete_modal::DeleteUserModal;
use components::edit_modal::EditUserModal;
use components::pager::Pager;
use components::user_card::UserCard;
use i18n::{en_us, zh_cn, LanguageType};
use icons::{CycleIcon, LoadingIcon, MoonIcon, SunIcon};
use userdesk_sdk::api;
use userdesk_sdk::error::Result;
use userdesk_sdk::model::notification::Notification;
use userdesk_sdk::model::page::Page;
use userdesk_sdk::model::user::{User, UserPage};
use userdesk_sdk::session::{SessionGate, SessionHandle};
use userdesk_sdk::state::{palette, I18nState, ListView, LoadTicket, Modal, UserListState};
use utils::tr;

/// the paginated user list screen
pub struct Users {
    state: UserListState,
    authorized: bool,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
    _lang_dis: Dispatch<I18nState>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct UsersProps {
    #[prop_or_default]
    pub session: SessionHandle,
}

pub enum UsersMsg {
    Loaded(LoadTicket, Result<UserPage>),
    Prev,
    Next,
    Retry,
    Edit(User),
    Delete(User),
    Updated(User),
    Removed(u32),
    CloseModal,
    ToggleTheme,
    Logout,
    LanguageChanged(Rc<I18nState>),
}

impl Component for Users {
    type Message = UsersMsg;

    type Properties = UsersProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut state = UserListState::new(ctx.props().session.clone());
        let authorized = match state.require_session() {
            SessionGate::Granted(_) => {
                let ticket = state.begin_load(1);
                Self::fetch(ctx, ticket);
                true
            }
            SessionGate::Redirect => false,
        };

        let _lang_dis = Dispatch::<I18nState>::global()
            .subscribe_silent(ctx.link().callback(UsersMsg::LanguageChanged));
        let lang = _lang_dis.get().lang;

        Self {
            state,
            authorized,
            i18n: bundle_for(lang, en_us::USER_LIST, zh_cn::USER_LIST),
            lang,
            _lang_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UsersMsg::Loaded(ticket, result) => self.state.apply_load(ticket, result),
            UsersMsg::Prev => {
                let ticket = self.state.prev_page();
                Self::fetch(ctx, ticket)
            }
            UsersMsg::Next => {
                let ticket = self.state.next_page();
                Self::fetch(ctx, ticket)
            }
            UsersMsg::Retry => {
                let ticket = self.state.reload();
                Self::fetch(ctx, ticket)
            }
            UsersMsg::Edit(user) => {
                self.state.open_edit(user);
                true
            }
            UsersMsg::Delete(user) => {
                self.state.open_delete(user);
                true
            }
            UsersMsg::Updated(user) => {
                let name = user.full_name();
                if self.state.apply_update(&user) {
                    Notification::info(tr!(self.i18n, "updated", "name" => name)).notify();
                }
                true
            }
            UsersMsg::Removed(id) => {
                let name = self
                    .state
                    .users()
                    .iter()
                    .find(|user| user.id == id)
                    .map(User::full_name);
                if self.state.apply_removal(id) {
                    if let Some(name) = name {
                        Notification::info(tr!(self.i18n, "deleted", "name" => name))
                            .with_delay(2000)
                            .notify();
                    }
                }
                true
            }
            UsersMsg::CloseModal => {
                self.state.close_modal();
                true
            }
            UsersMsg::ToggleTheme => {
                let theme = self.state.toggle_theme();
                log::debug!("switch theme: {}", theme);
                true
            }
            UsersMsg::Logout => {
                if let Err(err) = self.state.logout() {
                    log::error!("clear session failed: {}", err);
                }
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Login);
                }
                false
            }
            UsersMsg::LanguageChanged(state) => {
                if state.lang == self.lang {
                    return false;
                }
                self.lang = state.lang;
                self.i18n = bundle_for(self.lang, en_us::USER_LIST, zh_cn::USER_LIST);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.authorized {
            return html!(<Redirect<Page> to={Page::Login}/>);
        }
        let palette = palette(self.state.theme());

        match self.state.view() {
            ListView::Loading => html! {
                <div class={classes!(palette.page, "full-screen")}>
                    <div class="loading-text"><LoadingIcon/>{tr!(self.i18n, "loading")}</div>
                </div>
            },
            ListView::Failed => html! {
                <div class={classes!(palette.page, "full-screen")}>
                    <div class="error-text">{tr!(self.i18n, "fetch_failed")}</div>
                    <button
                        class="primary"
                        disabled={self.state.is_loading()}
                        onclick={ctx.link().callback(|_| UsersMsg::Retry)}>
                        <CycleIcon/>{tr!(self.i18n, "retry")}
                    </button>
                </div>
            },
            ListView::Ready => self.ready_view(ctx),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.retire();
    }
}

impl Users {
    /// spawn the request for `ticket`; returns whether anything changed
    fn fetch(ctx: &Context<Self>, ticket: Option<LoadTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };
        ctx.link().send_future(async move {
            UsersMsg::Loaded(ticket, api::users().list(ticket.page()).await)
        });
        true
    }

    fn ready_view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.state.theme();
        let palette = palette(theme);
        let lang = self.lang;

        let theme_icon = if theme.is_dark() {
            html!(<SunIcon/>)
        } else {
            html!(<MoonIcon/>)
        };

        let cards = if self.state.users().is_empty() {
            html!(<p class={palette.muted}>{tr!(self.i18n, "empty")}</p>)
        } else {
            self.state
                .users()
                .iter()
                .map(|user| {
                    html! {
                        <UserCard
                            key={user.id}
                            user={user.clone()}
                            {lang}
                            {theme}
                            on_edit={ctx.link().callback(UsersMsg::Edit)}
                            on_delete={ctx.link().callback(UsersMsg::Delete)}
                            />
                    }
                })
                .collect::<Html>()
        };

        let close = ctx.link().callback(|_| UsersMsg::CloseModal);
        let modal = match self.state.modal() {
            Modal::None => html!(),
            Modal::Editing(user) => html! {
                <EditUserModal
                    key={format!("edit-{}", user.id)}
                    user={user.clone()}
                    {lang}
                    {theme}
                    on_update={ctx.link().callback(UsersMsg::Updated)}
                    {close}
                    />
            },
            Modal::Deleting(user) => html! {
                <DeleteUserModal
                    key={format!("delete-{}", user.id)}
                    user={user.clone()}
                    {lang}
                    {theme}
                    on_delete={ctx.link().callback(UsersMsg::Removed)}
                    {close}
                    />
            },
        };

        html! {
            <div class={palette.page}>
                <div class="container">
                    <div class="list-header">
                        <h1>{tr!(self.i18n, "title")}</h1>
                        <div class="header-actions">
                            <button
                                class="theme-toggle"
                                aria-label={tr!(self.i18n, "toggle_theme")}
                                onclick={ctx.link().callback(|_| UsersMsg::ToggleTheme)}>
                                {theme_icon}
                            </button>
                            <button class="danger" onclick={ctx.link().callback(|_| UsersMsg::Logout)}>
                                {tr!(self.i18n, "logout")}
                            </button>
                        </div>
                    </div>
                    <div class="user-grid">
                        {cards}
                    </div>
                    <Pager
                        current={self.state.current_page()}
                        total={self.state.total_pages()}
                        {lang}
                        {theme}
                        on_prev={ctx.link().callback(|_| UsersMsg::Prev)}
                        on_next={ctx.link().callback(|_| UsersMsg::Next)}
                        />
                </div>
                {modal}
            </div>
        }
    }
}
