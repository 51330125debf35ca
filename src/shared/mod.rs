pub mod constants;
pub mod errors;
pub mod logging;
pub mod viewport;

// Dioxus hooks (client and server render)
pub mod hooks;

#[cfg(test)]
pub(crate) mod testing;
