use std::{collections::HashMap, rc::Rc};

use gloo::timers::callback::Timeout;
use yew::{classes, html, Component, Context, Html, Properties};
use yewdux::Dispatch;

use userdesk_sdk::model::notification::{Notification, NotificationType};

type NotificationList = HashMap<i64, (Rc<Notification>, Timeout)>;

/// toast area, shows every notification dispatched through the global store
pub struct NotificationCom {
    notifications: NotificationList,
    _noti_dis: Dispatch<Notification>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    Notification(Rc<Notification>),
    Remove(i64),
}

impl Component for NotificationCom {
    type Message = Msg;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis = Dispatch::global().subscribe_silent(ctx.link().callback(Msg::Notification));
        Self {
            notifications: HashMap::new(),
            _noti_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notification(noti) => {
                let id = noti.id;
                let link = ctx.link().clone();
                let timeout = Timeout::new(noti.delay, move || link.send_message(Msg::Remove(id)));
                self.notifications.insert(id, (noti, timeout));
                true
            }
            Msg::Remove(id) => self.notifications.remove(&id).is_some(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let mut items: Vec<_> = self.notifications.iter().collect();
        items.sort_by_key(|(id, _)| **id);
        let notifications = items
            .into_iter()
            .map(|(id, (item, _))| {
                let class = match item.type_ {
                    NotificationType::Info => classes!("notification-item", "info"),
                    NotificationType::Error => classes!("notification-item", "error"),
                };
                html! {
                    <div {class} key={*id}>
                        {item.content.clone()}
                    </div>
                }
            })
            .collect::<Html>();
        html! {
            <div class="notify">
                {notifications}
            </div>
        }
    }
}
