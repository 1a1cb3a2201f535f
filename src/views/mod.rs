pub mod contact;
pub use contact::ContactSection;

pub mod documentation;
pub use documentation::DocumentationSection;

pub mod download;
pub use download::DownloadSection;

mod features;
pub use features::FeaturesSection;

mod hero;
pub use hero::Hero;

mod home;
pub use home::{Docs, Home};

mod not_found;
pub use not_found::PageNotFound;

mod pricing;
pub use pricing::PricingSection;

pub mod testimonials;
pub use testimonials::TestimonialsSection;
