pub mod api;
pub mod components;

use crate::components::greeting_view::GreetingView;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <GreetingView />
    }
}
