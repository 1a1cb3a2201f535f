use crate::catalog::links::Social;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_brands_icons::{FaFacebook, FaGithub, FaInstagram, FaLinkedin, FaTwitter, FaYoutube},
    Icon,
};

#[component]
pub fn SocialIcon(social: Social, size: u32) -> Element {
    match social {
        Social::Facebook => rsx! { Icon { icon: FaFacebook, width: size, height: size } },
        Social::Twitter => rsx! { Icon { icon: FaTwitter, width: size, height: size } },
        Social::Instagram => rsx! { Icon { icon: FaInstagram, width: size, height: size } },
        Social::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: size, height: size } },
        Social::GitHub => rsx! { Icon { icon: FaGithub, width: size, height: size } },
        Social::YouTube => rsx! { Icon { icon: FaYoutube, width: size, height: size } },
    }
}
