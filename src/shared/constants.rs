//! Shared constants for layout and static assets.

/// Viewport width (logical pixels) at which the navigation switches from the
/// collapsible panel to the inline link list. Must match the media queries in
/// `assets/css/navbar.css`.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

/// Width assumed when no viewport can be observed (server-side rendering).
pub const WIDE_VIEWPORT_FALLBACK_PX: f64 = 1024.0;

/// DOM event carrying viewport width changes.
pub const RESIZE_EVENT: &str = "resize";

// Static assets served from `public/`
pub const FAVICON_PATH: &str = "/app_farm.jpg?v=3";
pub const LOGO_PATH: &str = "/logo.png?height=40&width=40";
pub const HERO_IMAGE_PATH: &str = "/trucks_hero_page.jpeg?height=600&width=1600";
pub const MOBILE_PREVIEW_PATH: &str = "/app_farm.jpg?height=400&width=300";

pub const DEFAULT_SITE_TITLE: &str = "Local Farmer Community";
pub const DEFAULT_ORGANIZATION: &str = "Local Farmer Community";
pub const DEFAULT_BRAND_YEAR: u16 = 2024;
