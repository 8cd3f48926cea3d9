use frontend_greeting::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
