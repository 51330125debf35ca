pub mod button;
pub mod card;
pub mod icons;

pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use card::{Card, CardGrid};
pub use icons::{ChevronLeftIcon, ChevronRightIcon, CloseIcon, MenuIcon, SocialIcon};
