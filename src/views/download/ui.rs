use crate::catalog::download::{RequirementStatus, INSTALLATION_STEPS, SYSTEM_REQUIREMENTS};
use crate::common::{tab_button_class, TabKey, TabSwitch};
use crate::components::DownloadProgress;
use crate::services::Services;
use crate::views::download::handlers::begin_download;
use crate::views::documentation::DocTab;
use crate::views::download::types::{DownloadState, InstallTab};
use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaCircleInfo, FaCircleQuestion, FaShieldHalved, FaXmark},
    Icon,
};

#[component]
pub fn DownloadSection() -> Element {
    let services = use_context::<Services>();
    let download = use_signal(DownloadState::default);
    let mut tabs = use_signal(|| TabSwitch::new(InstallTab::default()));

    let handle_download = move |_| {
        let config = &services.config;
        if let Some(run) = begin_download(
            services.clock.clone(),
            config.download_tick,
            config.download_step,
            download,
        ) {
            spawn(run);
        }
    };

    let tab_content = match tabs().active() {
        InstallTab::Requirements => rsx! { RequirementsTable {} },
        InstallTab::Installation => rsx! { InstallationGuide {} },
    };

    rsx! {
        section { id: "download", class: "w-full py-24 bg-background-medium",
            div { class: "container mx-auto px-4 md:px-6",
                div { class: "flex flex-col items-center text-center mb-12",
                    h2 { class: "text-3xl md:text-4xl font-bold tracking-tight mb-4 text-text-primary",
                        "Download & Installation"
                    }
                    p { class: "text-lg text-text-secondary max-w-3xl",
                        "Get started with our powerful CAD-to-Revit conversion plugin in minutes. Simple installation, automatic updates, and seamless integration with your workflow."
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8 max-w-6xl mx-auto",
                    DownloadProgress { state: download, on_download_click: handle_download }

                    div { class: "lg:col-span-2 bg-background-card rounded-xl shadow-lg p-6",
                        div { class: "flex gap-2 p-1 mb-6 bg-background-medium rounded-lg",
                            role: "tablist",
                            for tab in InstallTab::ALL.iter().copied() {
                                button {
                                    key: "{tab.key()}",
                                    role: "tab",
                                    class: tab_button_class(tabs().is_active(tab)),
                                    "aria-selected": "{tabs().is_active(tab)}",
                                    onclick: move |_| tabs.write().select(tab),
                                    "{tab.label()}"
                                }
                            }
                        }
                        div { role: "tabpanel", id: "install-{tabs().active().key()}", {tab_content} }
                    }
                }

                div { class: "mt-16 text-center",
                    div { class: "inline-flex items-center justify-center p-4 bg-background-card rounded-lg mb-4",
                        Icon {
                            icon: FaShieldHalved,
                            width: 20,
                            height: 20,
                            class: "text-primary-400 mr-2",
                        }
                        span { class: "text-sm font-medium", "Secure download with automatic virus scanning" }
                    }
                    p { class: "text-sm text-text-secondary max-w-2xl mx-auto",
                        "Having trouble with installation? Check out our "
                        Link {
                            to: Route::Docs { tab: DocTab::Faq.key().to_string() },
                            class: "text-primary-400 underline underline-offset-2",
                            "troubleshooting guide"
                        }
                        " or "
                        a { href: "#contact", class: "text-primary-400 underline underline-offset-2",
                            "contact our support team"
                        }
                        " for assistance."
                    }
                }
            }
        }
    }
}

#[component]
fn RequirementsTable() -> Element {
    rsx! {
        div { class: "rounded-lg border border-border p-4",
            div { class: "grid grid-cols-5 gap-4 font-medium text-sm mb-2 px-2",
                div { class: "col-span-2", "Requirement" }
                div { "Minimum" }
                div { "Recommended" }
                div { class: "text-center", "Status" }
            }
            hr { class: "my-2 border-border" }
            for req in SYSTEM_REQUIREMENTS.iter() {
                div {
                    key: "{req.name}",
                    class: "grid grid-cols-5 gap-4 py-3 text-sm px-2 items-center",
                    div { class: "col-span-2 font-medium", "{req.name}" }
                    div { class: "text-text-secondary", "{req.required}" }
                    div { class: "text-text-secondary", "{req.recommended}" }
                    div { class: "flex justify-center", title: "{req.status.tooltip()}",
                        StatusIcon { status: req.status }
                    }
                }
            }
        }
        div { class: "flex items-center p-4 mt-4 bg-amber-900 bg-opacity-20 rounded-lg",
            Icon {
                icon: FaCircleQuestion,
                width: 18,
                height: 18,
                class: "text-accent-amber mr-2 flex-shrink-0",
            }
            p { class: "text-sm text-amber-300",
                "Not sure if your system is compatible? Use our online system checker tool or contact support for assistance."
            }
        }
    }
}

#[component]
fn StatusIcon(status: RequirementStatus) -> Element {
    match status {
        RequirementStatus::Pass => rsx! {
            Icon { icon: FaCheck, width: 18, height: 18, class: "text-green-500" }
        },
        RequirementStatus::Warning => rsx! {
            Icon { icon: FaCircleInfo, width: 18, height: 18, class: "text-accent-amber" }
        },
        RequirementStatus::Fail => rsx! {
            Icon { icon: FaXmark, width: 18, height: 18, class: "text-accent-rose" }
        },
    }
}

#[component]
fn InstallationGuide() -> Element {
    let last = INSTALLATION_STEPS.len().saturating_sub(1);

    rsx! {
        div { class: "space-y-6",
            for (index, step) in INSTALLATION_STEPS.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "flex flex-col md:flex-row gap-6 items-start",
                    div { class: "relative flex-shrink-0",
                        div { class: "w-16 h-16 rounded-full bg-primary-600 bg-opacity-20 flex items-center justify-center text-primary-400 font-bold text-xl",
                            "{index + 1}"
                        }
                        if index < last {
                            div { class: "absolute top-16 left-1/2 w-0.5 -ml-px h-12 bg-border hidden md:block" }
                        }
                    }
                    div { class: "flex-1 space-y-3",
                        h3 { class: "text-lg font-medium text-text-primary", "{step.title}" }
                        p { class: "text-text-secondary", "{step.description}" }
                        div { class: "rounded-lg overflow-hidden border border-border",
                            img {
                                src: "{step.image}",
                                alt: "Installation step {index + 1}: {step.title}",
                                class: "w-full h-48 object-cover",
                            }
                        }
                    }
                }
            }
        }
    }
}
