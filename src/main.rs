#![recursion_limit = "256"]

use dioxus::prelude::*;

use components::Header;
use services::Services;
use views::{Docs, Home, PageNotFound};

mod catalog;
mod clock;
mod components;
mod config;
mod consent;
mod services;
mod storage;
mod views;

pub mod common;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Header)]
    #[route("/")]
    Home {},
    #[route("/docs/:tab")]
    Docs { tab: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    if let Err(e) = dioxus::logger::init(config::log_level()) {
        eprintln!("Logger initialization error: {}", e);
    }

    let Some(renderer) = config::renderer() else {
        tracing::error!("No renderer compiled in; run with `--features desktop` or `--features web`");
        std::process::exit(1);
    };
    tracing::info!(renderer, "Starting application");

    // Launch the app based on target platform
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        LaunchBuilder::web().launch(App);
    }
}

#[component]
fn App() -> Element {
    use_context_provider(Services::platform);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
    }
}
