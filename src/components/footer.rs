use crate::catalog::links::{FOOTER_GROUPS, FOOTER_SOCIALS, LEGAL_LINKS};
use crate::catalog::PRODUCT;
use crate::components::{AnimatedLogo, SocialIcon};
use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaEnvelope, FaLocationDot, FaPhone},
    Icon,
};

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "w-full bg-background-medium border-t border-border",
            div { class: "container mx-auto px-4 md:px-6 py-12",
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    div { class: "space-y-4",
                        div { class: "flex items-center gap-2",
                            AnimatedLogo { size: 28 }
                            span { class: "font-bold", "{PRODUCT.name}" }
                        }
                        p { class: "text-sm text-text-secondary", "{PRODUCT.tagline}" }
                        div { class: "flex gap-3",
                            for social in FOOTER_SOCIALS.iter().copied() {
                                a {
                                    key: "{social.label()}",
                                    href: social.href(),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": social.label(),
                                    class: "text-text-muted hover:text-primary-400 transition-colors",
                                    SocialIcon { social: social, size: 18 }
                                }
                            }
                        }
                    }

                    for group in FOOTER_GROUPS.iter() {
                        div { key: "{group.title}",
                            h4 { class: "font-semibold mb-4", "{group.title}" }
                            ul { class: "space-y-2 text-sm",
                                for link in group.links.iter() {
                                    li { key: "{link.label}",
                                        if link.is_route() {
                                            Link {
                                                to: link.href,
                                                class: "text-text-secondary hover:text-primary-400 transition-colors",
                                                "{link.label}"
                                            }
                                        } else {
                                            a {
                                                href: "{link.href}",
                                                class: "text-text-secondary hover:text-primary-400 transition-colors",
                                                "{link.label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "font-semibold mb-4", "Contact" }
                        ul { class: "space-y-3 text-sm text-text-secondary",
                            li { class: "flex items-start gap-2",
                                Icon { icon: FaLocationDot, width: 14, height: 14, class: "mt-1 text-primary-400" }
                                span { "{PRODUCT.contact_address}" }
                            }
                            li { class: "flex items-center gap-2",
                                Icon { icon: FaPhone, width: 14, height: 14, class: "text-primary-400" }
                                a { href: PRODUCT.contact_tel(), class: "hover:text-primary-400",
                                    "{PRODUCT.contact_phone}"
                                }
                            }
                            li { class: "flex items-center gap-2",
                                Icon { icon: FaEnvelope, width: 14, height: 14, class: "text-primary-400" }
                                a { href: PRODUCT.contact_mailto(), class: "hover:text-primary-400",
                                    "{PRODUCT.contact_email}"
                                }
                            }
                        }
                    }
                }

                hr { class: "my-8 border-border" }

                div { class: "flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-text-muted",
                    p { "© {year} {PRODUCT.name}. All rights reserved." }
                    div { class: "flex gap-6",
                        for link in LEGAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                href: "{link.href}",
                                class: "hover:text-primary-400 transition-colors",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
