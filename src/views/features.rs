use crate::catalog::features::FEATURES;
use crate::components::FeatureCard;
use dioxus::prelude::*;

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { id: "features", class: "w-full py-24 bg-background-medium",
            div { class: "container mx-auto px-4 md:px-6",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4 text-text-primary", "Powerful Features" }
                    p { class: "text-lg text-text-secondary max-w-3xl mx-auto",
                        "Everything you need to bring CAD drawings into Revit accurately and fast"
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for feature in FEATURES.iter().copied() {
                        FeatureCard { key: "{feature.title}", feature: feature }
                    }
                }
            }
        }
    }
}
