use dioxus::prelude::*;

use crate::app::sections::{Benefits, Features, Hero, MobileAccess, Testimonials};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Benefits {}
        Testimonials {}
        Features {}
        MobileAccess {}
    }
}
