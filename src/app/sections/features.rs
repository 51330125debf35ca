use dioxus::prelude::*;

use crate::app::components::CardGrid;
use crate::domain::content::FEATURES;

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "c-section c-section--muted",
            div { class: "c-section__inner",
                h2 { class: "c-section__title", "Feature Highlights" }
                CardGrid { entries: FEATURES, centered: true }
            }
        }
    }
}
