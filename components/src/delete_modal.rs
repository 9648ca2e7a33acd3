use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use userdesk_sdk::api;
use userdesk_sdk::error::Result;
use userdesk_sdk::model::user::User;
use userdesk_sdk::state::{palette, DeleteConfirm, ThemeState};
use utils::tr;

use crate::{bundle_for, form_error_bundle};

pub struct DeleteUserModal {
    confirm: DeleteConfirm,
    i18n: FluentBundle<FluentResource>,
    err_i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct DeleteUserModalProps {
    pub user: User,
    pub lang: LanguageType,
    pub theme: ThemeState,
    pub on_delete: Callback<u32>,
    pub close: Callback<()>,
}

pub enum DeleteUserMsg {
    Confirm,
    Response(Result<()>),
}

impl Component for DeleteUserModal {
    type Message = DeleteUserMsg;

    type Properties = DeleteUserModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let lang = ctx.props().lang;
        Self {
            confirm: DeleteConfirm::new(ctx.props().user.clone()),
            i18n: bundle_for(lang, en_us::DELETE_USER, zh_cn::DELETE_USER),
            err_i18n: form_error_bundle(lang),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DeleteUserMsg::Confirm => {
                if let Some(id) = self.confirm.begin_confirm() {
                    ctx.link().send_future(async move {
                        DeleteUserMsg::Response(api::users().delete(id).await)
                    });
                }
                true
            }
            DeleteUserMsg::Response(result) => {
                if let Some(id) = self.confirm.finish_confirm(result) {
                    ctx.props().on_delete.emit(id);
                    ctx.props().close.emit(());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let palette = palette(ctx.props().theme);
        let error = match self.confirm.error() {
            Some(err) => html!(<div class="form-error">{tr!(self.err_i18n, err.key())}</div>),
            None => html!(),
        };
        let name = self.confirm.user().full_name();
        let delete = if self.confirm.is_submitting() {
            tr!(self.i18n, "deleting")
        } else {
            tr!(self.i18n, "delete")
        };

        html! {
            <div class="modal-mask">
                <div class={palette.modal}>
                    <h2>{tr!(self.i18n, "title")}</h2>
                    {error}
                    <p class="confirm-text">{tr!(self.i18n, "confirm", "name" => name)}</p>
                    <div class="modal-actions">
                        <button class="cancel" onclick={ctx.props().close.reform(|_| ())}>
                            {tr!(self.i18n, "cancel")}
                        </button>
                        <button
                            class="danger"
                            disabled={self.confirm.is_submitting()}
                            onclick={ctx.link().callback(|_| DeleteUserMsg::Confirm)}>
                            {delete}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
