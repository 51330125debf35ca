use dioxus::prelude::*;

use crate::app::components::{ButtonLink, ButtonSize};
use crate::domain::content::{MOBILE_COPY, MOBILE_CTA, MOBILE_HEADING};
use crate::shared::constants::MOBILE_PREVIEW_PATH;

#[component]
pub fn MobileAccess() -> Element {
    rsx! {
        section { class: "c-section",
            div { class: "c-section__inner c-split",
                div { class: "c-split__media",
                    img {
                        class: "c-split__image",
                        src: MOBILE_PREVIEW_PATH,
                        alt: "Mobile app preview",
                        width: "300",
                        height: "400",
                    }
                }
                div { class: "c-split__body",
                    h2 { class: "c-section__title c-section__title--left", "{MOBILE_HEADING}" }
                    p { class: "c-split__copy", "{MOBILE_COPY}" }
                    ButtonLink { link: MOBILE_CTA, size: ButtonSize::Large }
                }
            }
        }
    }
}
