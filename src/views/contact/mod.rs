mod handlers;
mod types;
mod ui;

pub use ui::ContactSection;
