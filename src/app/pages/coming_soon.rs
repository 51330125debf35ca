use dioxus::prelude::*;

use crate::app::components::ButtonLink;
use crate::domain::content::destination_label;
use crate::domain::models::NavLink;

const BACK_HOME: NavLink = NavLink::plain("Back to Home", "/");

/// Placeholder for destinations that have no page yet
#[component]
pub fn ComingSoon(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let (title, message) = match destination_label(&path) {
        Some(label) => (label, "This part of the community is still growing. Check back soon."),
        None => ("Page not found", "We couldn't find the page you were looking for."),
    };

    rsx! {
        section { class: "c-section c-coming-soon",
            div { class: "c-section__inner",
                h1 { class: "c-section__title", "{title}" }
                p { class: "c-coming-soon__text", "{message}" }
                ButtonLink { link: BACK_HOME }
            }
        }
    }
}
