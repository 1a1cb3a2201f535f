use crate::components::scroll_to_section;
use crate::views::{
    ContactSection, DocumentationSection, DownloadSection, FeaturesSection, Hero, PricingSection,
    TestimonialsSection,
};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        Landing { doc_tab: None }
    }
}

/// `/docs/:tab`: the landing page opened on one documentation tab.
#[component]
pub fn Docs(tab: String) -> Element {
    use_effect(use_reactive((&tab,), |(tab,)| {
        tracing::debug!("Opening documentation tab {}", tab);
        scroll_to_section("documentation");
    }));

    rsx! {
        Landing { doc_tab: Some(tab) }
    }
}

#[component]
fn Landing(doc_tab: Option<String>) -> Element {
    let doc_key = doc_tab.clone().unwrap_or_default();

    rsx! {
        Hero {}
        FeaturesSection {}
        // Keyed so a new /docs/:tab link remounts with that tab selected
        DocumentationSection { key: "{doc_key}", initial_tab: doc_tab }
        DownloadSection {}
        TestimonialsSection {}
        PricingSection {}
        ContactSection {}
    }
}
