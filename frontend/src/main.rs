use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod journey;
mod pages;
mod waitlist;

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <div id="main-content">
            <Home />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("starting UMe site");
    yew::Renderer::<App>::new().render();
}
