// Custom Dioxus hooks
pub mod use_carousel;
pub mod use_navigation_menu;
pub mod use_viewport_width;

pub use use_carousel::{use_carousel, Carousel};
pub use use_navigation_menu::{use_navigation_menu, use_navigation_menu_from, NavigationMenuState};
pub use use_viewport_width::{use_viewport_width, use_viewport_width_from};
