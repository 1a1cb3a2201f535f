mod types;
mod ui;

pub use types::DocTab;
pub use ui::DocumentationSection;
