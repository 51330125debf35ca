/// How a navigation entry is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Plain,
    CallToAction,
}

/// Navigation entry, defined at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
}

impl NavLink {
    pub const fn plain(label: &'static str, href: &'static str) -> Self {
        Self { label, href, kind: LinkKind::Plain }
    }

    pub const fn call_to_action(label: &'static str, href: &'static str) -> Self {
        Self { label, href, kind: LinkKind::CallToAction }
    }
}

/// Title/description pair rendered as a card (benefits, features)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

/// Titled list of links in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    YouTube,
}

impl SocialPlatform {
    pub fn aria_label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::YouTube => "YouTube",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: &'static str,
}
