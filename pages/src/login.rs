use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use components::bundle_for;
use i18n::{en_us, zh_cn, LanguageType};
use icons::{MoonIcon, SunIcon};
use userdesk_sdk::api;
use userdesk_sdk::error::Error;
use userdesk_sdk::model::notification::Notification;
use userdesk_sdk::model::page::Page;
use userdesk_sdk::model::user::LoginRequest;
use userdesk_sdk::session::{SessionHandle, SessionStore};
use userdesk_sdk::state::{palette, I18nState, ThemeState};
use utils::tr;

pub struct Login {
    email_ref: NodeRef,
    pwd_ref: NodeRef,
    login_state: LoginState,
    show_error: bool,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
    theme: ThemeState,
    lang_dis: Dispatch<I18nState>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoginProps {
    #[prop_or_default]
    pub session: SessionHandle,
}

pub enum LoginMsg {
    Login(SubmitEvent),
    Success,
    Failed(Error),
    SwitchLanguage(Event),
    LanguageChanged(Rc<I18nState>),
    SwitchTheme,
}

#[derive(PartialEq)]
pub enum LoginState {
    Logining,
    Nothing,
}

impl Component for Login {
    type Message = LoginMsg;

    type Properties = LoginProps;

    fn create(ctx: &Context<Self>) -> Self {
        let lang_dis =
            Dispatch::<I18nState>::global().subscribe(ctx.link().callback(LoginMsg::LanguageChanged));
        let lang = lang_dis.get().lang;

        Self {
            email_ref: NodeRef::default(),
            pwd_ref: NodeRef::default(),
            login_state: LoginState::Nothing,
            show_error: false,
            i18n: bundle_for(lang, en_us::LOGIN, zh_cn::LOGIN),
            lang,
            theme: ThemeState::from_flag(ctx.props().session.dark_mode()),
            lang_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::Login(event) => {
                event.prevent_default();
                if self.login_state == LoginState::Logining {
                    return false;
                }
                let (Some(email), Some(pwd)) = (
                    self.email_ref.cast::<HtmlInputElement>(),
                    self.pwd_ref.cast::<HtmlInputElement>(),
                ) else {
                    return false;
                };
                let req = LoginRequest {
                    email: email.value(),
                    password: pwd.value(),
                };

                let session = ctx.props().session.clone();
                ctx.link().send_future(async move {
                    let res = match api::auth().sign_in(req).await {
                        Ok(resp) => resp,
                        Err(err) => return LoginMsg::Failed(err),
                    };
                    if let Err(err) = session.set_token(&res.token) {
                        return LoginMsg::Failed(err);
                    }
                    LoginMsg::Success
                });
                self.login_state = LoginState::Logining;
                self.show_error = false;
                true
            }
            LoginMsg::Success => {
                log::debug!("login success");
                self.login_state = LoginState::Nothing;
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Page::Users);
                }
                false
            }
            LoginMsg::Failed(err) => {
                self.login_state = LoginState::Nothing;
                self.show_error = true;
                Notification::error(tr!(self.i18n, "login_failed"), err).notify();
                true
            }
            LoginMsg::SwitchLanguage(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                let lang = LanguageType::from(input.value().as_str());
                self.lang_dis.reduce_mut(|s| s.lang = lang);
                false
            }
            LoginMsg::LanguageChanged(state) => {
                if state.lang == self.lang {
                    return false;
                }
                log::debug!("switch language: {}", state.lang);
                self.lang = state.lang;
                self.i18n = bundle_for(self.lang, en_us::LOGIN, zh_cn::LOGIN);
                true
            }
            LoginMsg::SwitchTheme => {
                self.theme = self.theme.toggle();
                if let Err(err) = ctx.props().session.set_dark_mode(self.theme.is_dark()) {
                    log::error!("save theme failed: {}", err);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let palette = palette(self.theme);
        let info = if self.show_error {
            html!(<div class="form-error">{tr!(self.i18n, "login_failed")}</div>)
        } else {
            html!()
        };

        let login_title = tr!(self.i18n, "login_text");
        let onchange = ctx.link().callback(LoginMsg::SwitchLanguage);

        let theme_icon = if self.theme.is_dark() {
            html!(<SunIcon/>)
        } else {
            html!(<MoonIcon/>)
        };

        html! {
            <div class={classes!(palette.page, "login-container")}>
                <form class={classes!(palette.card, "login-wrapper")} onsubmit={ctx.link().callback(LoginMsg::Login)}>
                    <span class="theme-toggle" onclick={ctx.link().callback(|_| LoginMsg::SwitchTheme)}>
                        {theme_icon}
                    </span>
                    <div class="sign">
                        {login_title.clone()}
                    </div>
                    {info}
                    <div class="email">
                        <input type="email" ref={self.email_ref.clone()} required={true} autocomplete="username" placeholder={tr!(self.i18n, "email")}/>
                    </div>
                    <div class="pwd">
                        <input type="password" ref={self.pwd_ref.clone()} required={true} autocomplete="current-password" placeholder={tr!(self.i18n, "password")}/>
                    </div>
                    <div class="language">
                        <label for="en_us">
                            <input type="radio" name="language" id="en_us" value="en_us" onchange={onchange.clone()} checked={self.lang==LanguageType::EnUS}/>{"\tENG"}
                        </label>
                        <label for="zh_cn">
                            <input type="radio" name="language" id="zh_cn" value="zh_cn" {onchange} checked={self.lang==LanguageType::ZhCN}/>{"\t中文"}
                        </label>
                    </div>
                    <input
                        type="submit"
                        class="submit"
                        disabled={self.login_state == LoginState::Logining}
                        value={login_title}/>
                </form>
            </div>
        }
    }
}
