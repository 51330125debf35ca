use dioxus::prelude::*;

use crate::app::components::{ButtonLink, ButtonSize, ButtonVariant};
use crate::domain::content::{HERO_COPY, HERO_HEADLINE, HERO_PRIMARY, HERO_SECONDARY};
use crate::shared::constants::HERO_IMAGE_PATH;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "c-hero",
            img {
                class: "c-hero__image",
                src: HERO_IMAGE_PATH,
                alt: "Farmers working in a field",
            }
            div { class: "c-hero__overlay" }
            div { class: "c-hero__content",
                h1 { class: "c-hero__title", "{HERO_HEADLINE}" }
                p { class: "c-hero__copy", "{HERO_COPY}" }
                div { class: "c-hero__actions",
                    ButtonLink { link: HERO_PRIMARY, size: ButtonSize::Large }
                    ButtonLink {
                        link: HERO_SECONDARY,
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                    }
                }
            }
        }
    }
}
