pub mod navbar;

pub use navbar::{NavigationBar, NavigationMenu, SiteHeader};
