use crate::catalog::links::NAV_LINKS;
use crate::catalog::PRODUCT;
use crate::components::{AnimatedLogo, CookieConsent, Footer, ScrollToTop};
use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBars, FaXmark},
    Icon,
};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Page chrome shared by every route: sticky header, footer and the overlays.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        div { class: "min-h-screen w-full bg-background text-text-primary flex flex-col",
            header { class: "site-header sticky top-0 z-40 w-full border-b border-border",
                div { class: "container mx-auto px-4 md:px-6 h-16 flex items-center justify-between",
                    // Logo
                    a { href: "#", class: "flex items-center gap-2",
                        AnimatedLogo { size: 32 }
                        span { class: "font-bold text-lg", "{PRODUCT.name}" }
                    }

                    // Desktop navigation
                    nav { class: "hidden md:flex items-center gap-6",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.href}",
                                href: "{link.href}",
                                class: "nav-link text-sm font-medium text-text-secondary",
                                "{link.label}"
                            }
                        }
                        a {
                            href: "#download",
                            class: "px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-500 text-sm font-semibold shadow-glow transition-colors",
                            "Download"
                        }
                    }

                    // Mobile toggle
                    button {
                        class: "md:hidden text-text-muted hover:text-text-primary p-2",
                        "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                        "aria-expanded": "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            Icon { icon: FaXmark, width: 20, height: 20 }
                        } else {
                            Icon { icon: FaBars, width: 20, height: 20 }
                        }
                    }
                }

                if menu_open() {
                    nav { class: "mobile-menu md:hidden border-t border-border px-4 py-4 flex flex-col gap-3",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.href}",
                                href: "{link.href}",
                                class: "nav-link py-2 text-text-secondary",
                                onclick: move |_| menu_open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }
            }

            main { class: "flex-1", Outlet::<Route> {} }

            Footer {}
        }

        ScrollToTop {}
        CookieConsent {}
    }
}

#[cfg(test)]
mod tests {
    const MAIN_CSS_SOURCE: &str = include_str!("../../assets/styling/main.css");

    #[test]
    fn test_layout_utilities_are_styled() {
        // Header nav switch, consent banner, demo dialog and scroll button
        for rule in [
            ".hidden {",
            ".fixed {",
            ".sticky {",
            ".inset-0 {",
            ".inset-x-0 {",
            ".bottom-0 {",
            ".z-50 {",
            ".md\\:flex {",
            ".md\\:hidden {",
            ".lg\\:block {",
        ] {
            assert!(MAIN_CSS_SOURCE.contains(rule), "main.css lacks {}", rule);
        }
    }

    #[test]
    fn test_responsive_rules_follow_base_display() {
        let hidden = MAIN_CSS_SOURCE.find(".hidden {").unwrap();
        let md_flex = MAIN_CSS_SOURCE.find(".md\\:flex {").unwrap();
        assert!(hidden < md_flex);
    }
}
