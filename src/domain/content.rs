//! Static copy for the landing page.
//!
//! Every section renders these sequences as-is: one card per entry, in
//! declaration order.

use crate::domain::models::{FooterColumn, InfoCard, NavLink, SocialLink, SocialPlatform, Testimonial};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::plain("Home", "/"),
    NavLink::plain("About", "/about"),
    NavLink::plain("Mission & Vision", "/mission"),
    NavLink::plain("Resources", "/resources"),
    NavLink::call_to_action("Sign Up", "/signup"),
];

pub const HERO_HEADLINE: &str = "Empowering Local Farmers with Data, Community, and Knowledge";
pub const HERO_COPY: &str = "Join the Local Farmer Community to access vital resources, connect with fellow farmers, and share sustainable practices for a thriving agricultural future.";
pub const HERO_PRIMARY: NavLink = NavLink::call_to_action("Join the Community", "/signup");
pub const HERO_SECONDARY: NavLink = NavLink::plain("Explore Resources", "/resources");

pub const BENEFITS: &[InfoCard] = &[
    InfoCard {
        title: "Access Data & Market Trends",
        description: "Stay informed with up-to-date data on crop prices, weather conditions, and market insights.",
    },
    InfoCard {
        title: "Connect & Collaborate",
        description: "Build connections with farmers across the USA, sharing knowledge, experiences, and solutions.",
    },
    InfoCard {
        title: "Learn & Grow",
        description: "Discover best practices and resources tailored to your region and crops.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "This platform has revolutionized how I manage my farm. The data insights are invaluable!",
        author: "John Doe, Corn Farmer",
    },
    Testimonial {
        quote: "Connecting with other farmers has helped me implement sustainable practices I never knew about.",
        author: "Jane Smith, Organic Vegetable Grower",
    },
    Testimonial {
        quote: "The resources available have helped me increase my crop yield by 20% this year.",
        author: "Mike Johnson, Wheat Farmer",
    },
];

pub const FEATURES: &[InfoCard] = &[
    InfoCard {
        title: "Forums",
        description: "Engage in discussions with fellow farmers",
    },
    InfoCard {
        title: "Data Dashboards",
        description: "Access real-time agricultural data and insights",
    },
    InfoCard {
        title: "Learning Resources",
        description: "Expand your knowledge with curated educational content",
    },
];

pub const MOBILE_HEADING: &str = "Access Anytime, Anywhere";
pub const MOBILE_COPY: &str = "Stay connected to your farming community and access vital resources on-the-go with our mobile-friendly platform.";
pub const MOBILE_CTA: NavLink = NavLink::call_to_action("Learn More", "/mobile");

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Quick Links",
        links: &[
            NavLink::plain("About Us", "/about"),
            NavLink::plain("Mission & Vision", "/mission"),
            NavLink::plain("Resources", "/resources"),
            NavLink::plain("Contact", "/contact"),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            NavLink::plain("Terms of Service", "/terms"),
            NavLink::plain("Privacy Policy", "/privacy"),
        ],
    },
];

pub const SOCIAL_HEADING: &str = "Connect With Us";
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { platform: SocialPlatform::Twitter, href: "#" },
    SocialLink { platform: SocialPlatform::Facebook, href: "#" },
    SocialLink { platform: SocialPlatform::YouTube, href: "#" },
];

/// Human label for an internal path, looked up across every link on the page.
/// The header label wins over the footer one when both exist.
pub fn destination_label(path: &str) -> Option<&'static str> {
    let path = normalize_path(path);
    NAV_LINKS
        .iter()
        .chain([HERO_PRIMARY, HERO_SECONDARY, MOBILE_CTA].iter())
        .chain(FOOTER_COLUMNS.iter().flat_map(|column| column.links.iter()))
        .find(|link| link.href == path)
        .map(|link| link.label)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LinkKind;

    #[test]
    fn test_nav_links_use_distinct_routes() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/mission", "/resources", "/signup"]);
    }

    #[test]
    fn test_sign_up_is_the_only_call_to_action() {
        let ctas: Vec<_> = NAV_LINKS
            .iter()
            .filter(|link| link.kind == LinkKind::CallToAction)
            .map(|link| link.label)
            .collect();
        assert_eq!(ctas, vec!["Sign Up"]);
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(BENEFITS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 3);
    }

    #[test]
    fn test_destination_label() {
        assert_eq!(destination_label("/about"), Some("About"));
        assert_eq!(destination_label("/about/"), Some("About"));
        assert_eq!(destination_label("/terms"), Some("Terms of Service"));
        assert_eq!(destination_label("/mobile"), Some("Learn More"));
        assert_eq!(destination_label(""), Some("Home"));
        assert_eq!(destination_label("/harvest"), None);
    }
}
