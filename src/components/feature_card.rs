use crate::catalog::features::{Feature, FeatureIcon};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaArrowsRotate, FaCopy, FaDrawPolygon, FaGaugeHigh, FaPlay, FaSliders, FaTableList, FaXmark,
    },
    Icon,
};

#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    let mut demo_open = use_signal(|| false);

    rsx! {
        div { class: "lightning-border group p-6 rounded-xl bg-background-card border border-border hover:border-primary-500 transition-colors flex flex-col",
            div { class: "w-12 h-12 rounded-lg bg-primary-600 bg-opacity-20 flex items-center justify-center text-primary-400 mb-4",
                FeatureGlyph { icon: feature.icon }
            }
            h3 { class: "text-xl font-semibold text-text-primary mb-2", "{feature.title}" }
            p { class: "text-text-secondary mb-6 flex-1", "{feature.description}" }
            button {
                class: "relative rounded-lg overflow-hidden border border-border h-40 w-full",
                "aria-label": "Watch demo: {feature.title}",
                onclick: move |_| demo_open.set(true),
                img {
                    src: "{feature.demo_thumbnail}",
                    alt: "{feature.title} demo",
                    class: "w-full h-full object-cover opacity-80 group-hover:opacity-100 transition-opacity",
                }
                div { class: "absolute inset-0 flex items-center justify-center",
                    span { class: "w-12 h-12 rounded-full bg-primary-600 flex items-center justify-center shadow-glow",
                        Icon { icon: FaPlay, width: 16, height: 16 }
                    }
                }
            }
        }

        if demo_open() {
            div {
                class: "fixed inset-0 z-50 bg-black bg-opacity-70 flex items-center justify-center p-4",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |_| demo_open.set(false),
                div {
                    class: "relative max-w-3xl w-full bg-background-card rounded-xl overflow-hidden shadow-lg",
                    onclick: move |evt| evt.stop_propagation(),
                    div { class: "flex items-center justify-between p-4 border-b border-border",
                        h3 { class: "font-semibold text-text-primary", "{feature.title}" }
                        button {
                            class: "text-text-muted hover:text-text-primary",
                            "aria-label": "Close demo",
                            onclick: move |_| demo_open.set(false),
                            Icon { icon: FaXmark, width: 18, height: 18 }
                        }
                    }
                    img {
                        src: "{feature.demo_url}",
                        alt: "{feature.title} demonstration",
                        class: "w-full",
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureGlyph(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Geometry => rsx! { Icon { icon: FaDrawPolygon, width: 22, height: 22 } },
        FeatureIcon::Mapping => rsx! { Icon { icon: FaTableList, width: 22, height: 22 } },
        FeatureIcon::Updates => rsx! { Icon { icon: FaArrowsRotate, width: 22, height: 22 } },
        FeatureIcon::Performance => rsx! { Icon { icon: FaGaugeHigh, width: 22, height: 22 } },
        FeatureIcon::Batch => rsx! { Icon { icon: FaCopy, width: 22, height: 22 } },
        FeatureIcon::Rules => rsx! { Icon { icon: FaSliders, width: 22, height: 22 } },
    }
}
