pub mod coming_soon;
pub mod home;
pub mod routes;

pub use coming_soon::ComingSoon;
pub use home::Home;
pub use routes::{App, Route};
