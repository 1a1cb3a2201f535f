// Static content tables rendered by the page sections
pub mod docs;
pub mod download;
pub mod features;
pub mod links;
pub mod pricing;
pub mod product;
pub mod testimonials;

pub use product::PRODUCT;
