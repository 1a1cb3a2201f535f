#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// In-app route (`/docs/...`) rather than a same-page anchor or external URL.
    pub fn is_route(&self) -> bool {
        self.href.starts_with('/')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
    GitHub,
    YouTube,
}

impl Social {
    pub fn label(self) -> &'static str {
        match self {
            Social::Facebook => "Facebook",
            Social::Twitter => "Twitter",
            Social::Instagram => "Instagram",
            Social::LinkedIn => "LinkedIn",
            Social::GitHub => "GitHub",
            Social::YouTube => "YouTube",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Social::Facebook => "https://facebook.com",
            Social::Twitter => "https://twitter.com",
            Social::Instagram => "https://instagram.com",
            Social::LinkedIn => "https://linkedin.com",
            Social::GitHub => "https://github.com",
            Social::YouTube => "https://youtube.com",
        }
    }
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const NAV_LINKS: &[NavLink] = &[
    link("Features", "#features"),
    link("Documentation", "#documentation"),
    link("Download", "#download"),
    link("Testimonials", "#testimonials"),
    link("Pricing", "#pricing"),
    link("Contact", "#contact"),
];

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Product",
        links: &[
            link("Features", "#features"),
            link("Documentation", "#documentation"),
            link("Download", "#download"),
            link("Testimonials", "#testimonials"),
        ],
    },
    LinkGroup {
        title: "Resources",
        links: &[
            link("API Reference", "/docs/api"),
            link("Tutorials", "/docs/tutorials"),
            link("FAQ", "/docs/faq"),
            link("Blog", "#blog"),
            link("Support", "#contact"),
        ],
    },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    link("Privacy Policy", "#privacy"),
    link("Terms of Service", "#terms"),
    link("License", "#license"),
];

pub const FOOTER_SOCIALS: &[Social] = &[
    Social::Facebook,
    Social::Twitter,
    Social::Instagram,
    Social::LinkedIn,
    Social::GitHub,
];

pub const CONTACT_SOCIALS: &[Social] = &[
    Social::Twitter,
    Social::LinkedIn,
    Social::GitHub,
    Social::YouTube,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours {
        days: "Monday - Friday:",
        hours: "9:00 AM - 6:00 PM EST",
    },
    OfficeHours {
        days: "Saturday:",
        hours: "10:00 AM - 2:00 PM EST",
    },
    OfficeHours {
        days: "Sunday:",
        hours: "Closed",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TabKey;
    use crate::views::documentation::DocTab;
    use crate::Route;

    #[test]
    fn test_footer_doc_links_open_known_tabs() {
        let routes: Vec<_> = FOOTER_GROUPS
            .iter()
            .flat_map(|group| group.links.iter())
            .filter(|link| link.is_route())
            .collect();
        assert_eq!(routes.len(), 3);

        for link in routes {
            let tab = link.href.strip_prefix("/docs/").unwrap();
            assert!(DocTab::parse(tab).is_some(), "{} has no doc tab", link.href);
            assert_eq!(
                link.href.parse::<Route>().ok(),
                Some(Route::Docs { tab: tab.to_string() })
            );
        }
    }

    #[test]
    fn test_nav_links_stay_on_page() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }
}
