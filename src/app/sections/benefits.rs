use dioxus::prelude::*;

use crate::app::components::CardGrid;
use crate::domain::content::BENEFITS;

#[component]
pub fn Benefits() -> Element {
    rsx! {
        section { class: "c-section c-section--muted",
            div { class: "c-section__inner",
                h2 { class: "c-section__title", "Key Benefits" }
                CardGrid { entries: BENEFITS }
            }
        }
    }
}
