mod dom;
mod gallery;
mod landing;
mod primitives;
mod tilt;

use dioxus::prelude::*;
use gallery::{Gallery, Sandbox};
use landing::Landing;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/gallery")]
    Gallery {},
    #[route("/sandbox")]
    Sandbox {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        style { "{gallery::STYLESHEET}" }
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    dioxus::launch(App);
}
