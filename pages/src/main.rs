mod login;
mod users;

use userdesk_sdk::model::page::Page;
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yew_router::{BrowserRouter, Switch};

use components::notification::NotificationCom;

use crate::{login::Login, users::Users};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Page> render={move |page|
                match page {
                    Page::Login => html!{<Login/>},
                    Page::Users => html!{<Users/>},
                    Page::Redirect | Page::NotFound => html!{<Redirect<Page> to={Page::Login}/>}}
            }/>
            <NotificationCom />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
