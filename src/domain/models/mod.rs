// Domain models
// Pure Rust, no framework dependencies

pub mod carousel;
pub mod content;
pub mod menu;

pub use carousel::CarouselPosition;
pub use content::{FooterColumn, InfoCard, LinkKind, NavLink, SocialLink, SocialPlatform, Testimonial};
pub use menu::{MenuVisibility, NavPresentation, ViewportClass};
