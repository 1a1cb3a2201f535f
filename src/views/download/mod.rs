mod handlers;
mod types;
mod ui;

pub use ui::DownloadSection;
pub use types::DownloadState;
