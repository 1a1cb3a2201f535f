mod animated_logo;
pub use animated_logo::AnimatedLogo;

mod cookie_consent;
pub use cookie_consent::CookieConsent;

mod download_progress;
pub use download_progress::DownloadProgress;

mod feature_card;
pub use feature_card::FeatureCard;

mod footer;
pub use footer::Footer;

mod header;
pub use header::Header;

mod scroll_to_top;
pub use scroll_to_top::{scroll_to_section, ScrollToTop};

mod social_icon;
pub use social_icon::SocialIcon;
