use crate::catalog::PRODUCT;
use crate::views::download::DownloadState;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaDownload, FaServer},
    Icon,
};

// Download card: release details, live progress and the download button
#[component]
pub fn DownloadProgress(state: Signal<DownloadState>, on_download_click: EventHandler<()>) -> Element {
    let current = state();
    let transferred = PRODUCT.transferred_mb(current.progress);
    let file_size = PRODUCT.file_size_label();

    let progress_block = if current.is_downloading {
        rsx! {
            div { class: "space-y-2",
                div { class: "flex items-center justify-between",
                    span { class: "text-sm font-medium text-text-primary", "{current.progress}%" }
                    span { class: "text-sm text-text-secondary", "{transferred} MB / {file_size}" }
                }
                div {
                    class: "w-full bg-background-medium rounded-full h-2",
                    role: "progressbar",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                    "aria-valuenow": "{current.progress}",
                    div {
                        class: "bg-primary-500 h-2 rounded-full transition-all duration-300",
                        style: "width: {current.progress}%",
                    }
                }
            }
        }
    } else if current.is_complete() {
        rsx! {
            p { class: "text-sm text-green-500 font-medium", "Download complete! Run the installer to get started." }
        }
    } else {
        rsx! {}
    };

    rsx! {
        div { class: "bg-background-card rounded-xl shadow-lg p-6 flex flex-col gap-4",
            div {
                h3 { class: "text-2xl font-semibold text-text-primary", "Download Now" }
                p { class: "text-sm text-text-muted mt-1",
                    "Latest version: {PRODUCT.version}"
                    span { class: "mx-2", "•" }
                    "Released: {PRODUCT.release_date}"
                }
            }

            div { class: "flex items-center justify-between",
                div { class: "flex items-center space-x-2 text-text-secondary",
                    Icon { icon: FaServer, width: 16, height: 16 }
                    span { class: "text-sm", "{file_size}" }
                }
                span { class: "text-xs px-2 py-1 rounded-full border border-green-700 text-green-400",
                    "Latest Release"
                }
            }

            div { class: "space-y-2 text-sm",
                div { class: "flex items-center justify-between",
                    span { class: "text-text-muted", "Compatible with:" }
                    span { class: "font-medium", "{PRODUCT.compatibility}" }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-text-muted", "License:" }
                    span { class: "font-medium", "{PRODUCT.license}" }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-text-muted", "Updates:" }
                    span { class: "font-medium", "{PRODUCT.updates}" }
                }
            }

            {progress_block}

            button {
                class: "w-full flex items-center justify-center bg-primary-600 hover:bg-primary-500 text-text-primary font-semibold py-3 px-4 rounded-lg transition-colors disabled:opacity-60 disabled:cursor-not-allowed",
                disabled: current.is_downloading,
                onclick: move |_| on_download_click.call(()),
                if current.is_downloading {
                    "Downloading..."
                    Icon {
                        icon: FaDownload,
                        width: 16,
                        height: 16,
                        class: "ml-2 animate-bounce",
                    }
                } else {
                    "Download"
                    Icon {
                        icon: FaDownload,
                        width: 16,
                        height: 16,
                        class: "ml-2",
                    }
                }
            }
        }
    }
}
