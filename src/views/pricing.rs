use crate::catalog::pricing::{PricingTier, PRICING_TIERS};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaCircleInfo, FaXmark},
    Icon,
};

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { id: "pricing", class: "w-full py-24 bg-background-medium",
            div { class: "container mx-auto px-4 md:px-6",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4 text-text-primary", "Simple, Transparent Pricing" }
                    p { class: "text-lg text-text-secondary max-w-3xl mx-auto",
                        "Choose the plan that fits your team. All plans include a 30-day money-back guarantee."
                    }
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto items-stretch",
                    for tier in PRICING_TIERS.iter().copied() {
                        PricingCard { key: "{tier.name}", tier: tier }
                    }
                }
            }
        }
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> Element {
    rsx! {
        div {
            class: "relative flex flex-col rounded-xl bg-background-card p-8 border",
            class: if tier.highlighted { "border-primary-500 shadow-glow md:scale-105" } else { "border-border" },
            if let Some(badge) = tier.badge {
                span { class: "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full bg-primary-600 text-xs font-semibold",
                    "{badge}"
                }
            }
            h3 { class: "text-2xl font-bold text-text-primary", "{tier.name}" }
            p { class: "text-sm text-text-muted mt-1 mb-6", "{tier.description}" }
            div { class: "mb-6",
                span { class: "text-4xl font-extrabold", "{tier.price}" }
                span { class: "text-sm text-text-muted ml-2", "{tier.billing_period}" }
            }
            ul { class: "space-y-3 flex-1 mb-8",
                for feature in tier.features.iter() {
                    li { key: "{feature.text}", class: "flex items-start gap-2 text-sm",
                        if feature.included {
                            Icon { icon: FaCheck, width: 14, height: 14, class: "mt-0.5 text-green-500" }
                        } else {
                            Icon { icon: FaXmark, width: 14, height: 14, class: "mt-0.5 text-text-muted" }
                        }
                        span {
                            class: if feature.included { "text-text-secondary" } else { "text-text-muted" },
                            "{feature.text}"
                        }
                        if let Some(tip) = feature.tooltip {
                            span { title: "{tip}", class: "text-text-muted cursor-help",
                                Icon { icon: FaCircleInfo, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
            a {
                href: "#contact",
                class: "w-full text-center py-3 rounded-lg font-semibold transition-colors",
                class: if tier.highlighted { "bg-primary-600 hover:bg-primary-500" } else { "border border-border hover:bg-background-hover" },
                "{tier.button_text}"
            }
        }
    }
}
