// frontend_greeting/src/components/greeting_view.rs
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::greeting::{display_text, fetch_greeting, LOADING_TEXT};

#[function_component(GreetingView)]
pub fn greeting_view() -> Html {
    let message = use_state(|| LOADING_TEXT.to_string());

    // Fetch the greeting once on mount; re-renders do not re-issue it.
    {
        let message = message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = fetch_greeting().await;
                message.set(display_text(outcome));
            });
            || ()
        });
    }

    html! {
        <div class="App">
            <h1>{ "Yew + Trunk Frontend" }</h1>
            <p>{ (*message).clone() }</p>
        </div>
    }
}
