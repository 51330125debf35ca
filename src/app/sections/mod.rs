// Landing page sections, top to bottom

mod benefits;
mod features;
mod footer;
mod hero;
mod mobile_access;
mod testimonials;

pub use benefits::Benefits;
pub use features::Features;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use mobile_access::MobileAccess;
pub use testimonials::{TestimonialCarousel, Testimonials};
