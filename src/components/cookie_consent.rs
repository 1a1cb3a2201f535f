use crate::consent::{reveal_after, ConsentBanner};
use crate::services::Services;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCookieBite, Icon};

#[component]
pub fn CookieConsent() -> Element {
    let services = use_context::<Services>();
    let mut banner = use_signal(|| {
        ConsentBanner::load(services.store.as_ref(), services.config.consent_key)
    });

    // Read once on mount, reveal after the delay when nothing was stored
    let reveal = services.clone();
    use_hook(move || {
        spawn(reveal_after(
            reveal.clock.clone(),
            reveal.config.consent_delay,
            banner,
        ))
    });

    if !banner().is_visible() {
        return rsx! {};
    }

    let accept_services = services.clone();
    let accept = move |_| {
        banner
            .write()
            .accept(accept_services.store.as_ref(), accept_services.config.consent_key);
    };
    let decline = move |_| {
        banner
            .write()
            .decline(services.store.as_ref(), services.config.consent_key);
    };

    rsx! {
        div {
            class: "consent-banner fixed bottom-0 inset-x-0 z-50 p-4",
            role: "dialog",
            "aria-live": "polite",
            "aria-label": "Cookie consent",
            div { class: "max-w-4xl mx-auto bg-background-card border border-border rounded-xl shadow-lg p-6 flex flex-col md:flex-row items-start md:items-center gap-4",
                Icon {
                    icon: FaCookieBite,
                    width: 28,
                    height: 28,
                    class: "text-accent-amber flex-shrink-0",
                }
                div { class: "flex-1",
                    h3 { class: "font-semibold text-text-primary mb-1", "We value your privacy" }
                    p { class: "text-sm text-text-secondary",
                        "We use cookies to enhance your browsing experience and analyze our traffic. By clicking \"Accept\", you consent to our use of cookies."
                    }
                }
                div { class: "flex gap-2 flex-shrink-0",
                    button {
                        class: "px-4 py-2 rounded-lg border border-border text-sm hover:bg-background-hover transition-colors",
                        onclick: decline,
                        "Decline"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-500 text-sm font-medium transition-colors",
                        onclick: accept,
                        "Accept"
                    }
                }
            }
        }
    }
}
