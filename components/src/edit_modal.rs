use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use userdesk_sdk::api;
use userdesk_sdk::error::Result;
use userdesk_sdk::model::user::User;
use userdesk_sdk::state::{palette, EditForm, Field, ThemeState};
use utils::tr;

use crate::{bundle_for, form_error_bundle};

/// edit dialog, issues one update per submit
pub struct EditUserModal {
    form: EditForm,
    i18n: FluentBundle<FluentResource>,
    err_i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct EditUserModalProps {
    pub user: User,
    pub lang: LanguageType,
    pub theme: ThemeState,
    pub on_update: Callback<User>,
    pub close: Callback<()>,
}

pub enum EditUserMsg {
    Input(Field, InputEvent),
    Submit(SubmitEvent),
    Response(Result<()>),
}

impl Component for EditUserModal {
    type Message = EditUserMsg;

    type Properties = EditUserModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let lang = ctx.props().lang;
        Self {
            form: EditForm::new(ctx.props().user.clone()),
            i18n: bundle_for(lang, en_us::EDIT_USER, zh_cn::EDIT_USER),
            err_i18n: form_error_bundle(lang),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EditUserMsg::Input(field, event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                self.form.set(field, input.value());
                false
            }
            EditUserMsg::Submit(event) => {
                event.prevent_default();
                if let Some((id, update)) = self.form.begin_submit() {
                    ctx.link().send_future(async move {
                        EditUserMsg::Response(api::users().update(id, update).await)
                    });
                }
                true
            }
            EditUserMsg::Response(result) => {
                if let Some(user) = self.form.finish_submit(result) {
                    log::debug!("user {} updated", user.id);
                    ctx.props().on_update.emit(user);
                    ctx.props().close.emit(());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let palette = palette(ctx.props().theme);
        let error = match self.form.error() {
            Some(err) => html!(<div class="form-error">{tr!(self.err_i18n, err.key())}</div>),
            None => html!(),
        };
        let submit = if self.form.is_submitting() {
            tr!(self.i18n, "updating")
        } else {
            tr!(self.i18n, "update")
        };

        let input = |field: Field, id: &'static str, label: &str, type_: &'static str| {
            html! {
                <div class="field">
                    <label for={id}>{tr!(self.i18n, label)}</label>
                    <input
                        {id}
                        type={type_}
                        required={true}
                        value={self.form.value(field).to_string()}
                        oninput={ctx.link().callback(move |e| EditUserMsg::Input(field, e))}
                        />
                </div>
            }
        };

        html! {
            <div class="modal-mask">
                <form class={palette.modal} onsubmit={ctx.link().callback(EditUserMsg::Submit)}>
                    <h2>{tr!(self.i18n, "title")}</h2>
                    {error}
                    {input(Field::FirstName, "first-name", "first_name", "text")}
                    {input(Field::LastName, "last-name", "last_name", "text")}
                    {input(Field::Email, "email", "email", "email")}
                    <div class="modal-actions">
                        <button type="button" class="cancel" onclick={ctx.props().close.reform(|_| ())}>
                            {tr!(self.i18n, "cancel")}
                        </button>
                        <button type="submit" class="primary" disabled={self.form.is_submitting()}>
                            {submit}
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}
