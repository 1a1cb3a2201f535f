use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowUp, Icon};

const SCROLL_TO_TOP_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

fn run_scroll(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::warn!("Scroll script failed: {:?}", e);
        }
    });
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    run_scroll(format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        id
    ));
}

#[component]
pub fn ScrollToTop() -> Element {
    rsx! {
        button {
            class: "fixed bottom-6 right-6 z-40 w-11 h-11 rounded-full bg-primary-600 hover:bg-primary-500 text-text-primary shadow-glow flex items-center justify-center transition-colors",
            "aria-label": "Scroll to top",
            onclick: move |_| run_scroll(SCROLL_TO_TOP_JS.to_string()),
            Icon { icon: FaArrowUp, width: 16, height: 16 }
        }
    }
}
