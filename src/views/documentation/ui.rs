use crate::catalog::docs::{ApiClass, API_DOCS, FAQS, TUTORIALS};
use crate::catalog::PRODUCT;
use crate::common::{stacked_tab_button_class, tab_button_class, TabKey, TabSwitch};
use crate::views::documentation::types::{Accordion, CodeLanguage, DocTab};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBook, FaChevronDown, FaCode, FaFileLines, FaLightbulb},
    Icon,
};

#[component]
pub fn DocumentationSection(#[props(default)] initial_tab: Option<String>) -> Element {
    let mut tabs = use_signal(|| DocTab::switch_for(initial_tab.as_deref()));
    let active = tabs().active();

    let body = match active {
        DocTab::Api => rsx! { ApiReference {} },
        DocTab::Tutorials => rsx! { Tutorials {} },
        DocTab::Code => rsx! { CodeExamples {} },
        DocTab::Faq => rsx! { FaqList {} },
    };

    rsx! {
        section { id: "documentation", class: "relative w-full py-24 bg-background overflow-hidden",
            div { class: "container mx-auto px-4 md:px-6 relative",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4 text-text-primary",
                        "Documentation & Resources"
                    }
                    p { class: "text-lg text-text-secondary max-w-3xl mx-auto",
                        "Comprehensive guides, API documentation, and examples to help you get the most out of our plugin"
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-4 gap-8",
                    // Tab list
                    div { class: "lg:col-span-1",
                        div { class: "bg-background-card rounded-xl shadow-lg p-6 sticky top-24",
                            h3 { class: "text-lg font-semibold text-text-primary", "Documentation" }
                            p { class: "text-sm text-text-muted mb-4", "Browse our resources" }
                            div { class: "flex flex-col gap-2", role: "tablist",
                                for tab in DocTab::ALL.iter().copied() {
                                    button {
                                        key: "{tab.key()}",
                                        role: "tab",
                                        class: stacked_tab_button_class(tabs().is_active(tab)),
                                        "aria-selected": "{tabs().is_active(tab)}",
                                        onclick: move |_| tabs.write().select(tab),
                                        DocTabIcon { tab: tab }
                                        span { class: "ml-2", "{tab.label()}" }
                                    }
                                }
                            }
                        }
                    }

                    // Tab body
                    div { class: "lg:col-span-3",
                        div { class: "bg-background-card rounded-xl shadow-lg p-6",
                            div { class: "flex items-center justify-between",
                                h3 { class: "text-2xl font-semibold text-text-primary", "{active.heading()}" }
                                span { class: "text-xs px-2 py-1 rounded-full border border-border text-text-muted",
                                    "v{PRODUCT.version}"
                                }
                            }
                            p { class: "text-sm text-text-muted mb-6", "{active.description()}" }
                            div { role: "tabpanel", id: "docs-{active.key()}", {body} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DocTabIcon(tab: DocTab) -> Element {
    match tab {
        DocTab::Api => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        DocTab::Tutorials => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
        DocTab::Code => rsx! { Icon { icon: FaCode, width: 16, height: 16 } },
        DocTab::Faq => rsx! { Icon { icon: FaLightbulb, width: 16, height: 16 } },
    }
}

#[component]
fn ApiReference() -> Element {
    let last = API_DOCS.len().saturating_sub(1);
    rsx! {
        div { class: "space-y-8",
            for (index, api) in API_DOCS.iter().enumerate() {
                ApiClassBlock { key: "{api.title}", api: *api }
                if index < last {
                    hr { class: "border-border" }
                }
            }
        }
    }
}

#[component]
fn ApiClassBlock(api: ApiClass) -> Element {
    rsx! {
        div { class: "space-y-4",
            div {
                h3 { class: "text-xl font-semibold text-text-primary", "{api.title}" }
                p { class: "text-text-secondary", "{api.description}" }
            }
            div { class: "space-y-4 pl-4 border-l-2 border-primary-600",
                for method in api.methods.iter() {
                    div { key: "{method.name}", class: "space-y-2",
                        div { class: "flex flex-wrap items-center gap-2",
                            span { class: "font-mono font-semibold text-primary-400", "{method.name}" }
                            code { class: "text-xs px-2 py-1 rounded border border-border text-text-muted",
                                "{method.signature}"
                            }
                        }
                        p { class: "text-sm text-text-secondary", "{method.description}" }
                        if !method.parameters.is_empty() {
                            div {
                                h4 { class: "text-sm font-medium text-text-primary", "Parameters:" }
                                ul { class: "text-sm space-y-1 mt-1",
                                    for param in method.parameters.iter() {
                                        li { key: "{param.name}",
                                            span { class: "font-mono text-primary-400", "{param.name}" }
                                            span { class: "text-text-muted", " ({param.ty}): " }
                                            span { "{param.description}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "text-sm",
                            h4 { class: "font-medium text-text-primary inline", "Returns: " }
                            span { class: "text-text-secondary", "{method.returns}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Tutorials() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
            for tutorial in TUTORIALS.iter() {
                div {
                    key: "{tutorial.title}",
                    class: "p-6 rounded-xl border border-border bg-background-medium",
                    h3 { class: "text-lg font-semibold text-text-primary mb-1", "{tutorial.title}" }
                    p { class: "text-sm text-text-secondary mb-4", "{tutorial.description}" }
                    div { class: "space-y-3",
                        for (step_index, step) in tutorial.steps.iter().enumerate() {
                            div { key: "{step_index}", class: "flex items-start gap-3",
                                span { class: "w-6 h-6 rounded-full bg-primary-600 text-xs flex items-center justify-center flex-shrink-0",
                                    "{step_index + 1}"
                                }
                                p { class: "text-sm text-text-secondary", "{step}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CodeExamples() -> Element {
    let mut languages = use_signal(|| TabSwitch::new(CodeLanguage::CSharp));
    let source = languages().active().source();

    rsx! {
        div { class: "space-y-4",
            div { class: "flex gap-2 p-1 bg-background-medium rounded-lg", role: "tablist",
                for lang in CodeLanguage::ALL.iter().copied() {
                    button {
                        key: "{lang.key()}",
                        role: "tab",
                        class: tab_button_class(languages().is_active(lang)),
                        "aria-selected": "{languages().is_active(lang)}",
                        onclick: move |_| languages.write().select(lang),
                        "{lang.label()}"
                    }
                }
            }
            div { class: "rounded-lg bg-background p-4 border border-border",
                pre { class: "code-block text-text-secondary", "{source}" }
            }
            p { class: "text-sm text-text-muted",
                "These code examples demonstrate basic usage of our API. For more advanced examples, check out our GitHub repository."
            }
        }
    }
}

#[component]
fn FaqList() -> Element {
    let mut accordion = use_signal(Accordion::default);

    rsx! {
        div { class: "divide-y divide-border",
            for (index, faq) in FAQS.iter().enumerate() {
                div { key: "{index}", class: "py-4",
                    button {
                        class: "w-full flex items-center justify-between text-left font-medium text-text-primary",
                        "aria-expanded": "{accordion().is_open(index)}",
                        onclick: move |_| accordion.write().toggle(index),
                        span { "{faq.question}" }
                        span {
                            class: "transition-transform duration-200",
                            class: if accordion().is_open(index) { "rotate-180" } else { "" },
                            Icon { icon: FaChevronDown, width: 14, height: 14 }
                        }
                    }
                    if accordion().is_open(index) {
                        p { class: "mt-3 text-sm text-text-secondary", "{faq.answer}" }
                    }
                }
            }
        }
    }
}
