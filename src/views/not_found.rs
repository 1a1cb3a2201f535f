use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-background text-text-primary px-4",
            h1 { class: "text-6xl font-extrabold text-primary-400 mb-4", "404" }
            p { class: "text-lg text-text-secondary mb-2", "This page could not be found." }
            code { class: "text-sm text-text-muted mb-8", "/{path}" }
            Link {
                to: Route::Home {},
                class: "px-6 py-3 rounded-lg bg-primary-600 hover:bg-primary-500 font-semibold transition-colors",
                "Back to home"
            }
        }
    }
}
