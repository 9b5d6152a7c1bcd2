use crate::pages::dashboard::DashboardPage;
use gloo_console::log;
use yew::{html, AttrValue, Component, Context, Html};

pub struct App {
    /// `navigator.language` at startup, if the browser reports one.
    locale: Option<AttrValue>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let locale = web_sys::window()
            .and_then(|window| window.navigator().language())
            .map(AttrValue::from);
        if let Some(locale) = &locale {
            log!("gallery admin locale:", locale.to_string());
        }
        Self { locale }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <DashboardPage locale={self.locale.clone()} />
        }
    }
}
