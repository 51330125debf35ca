//! Inline stroke icons (24x24 grid, currentColor).

use dioxus::prelude::*;

use crate::domain::models::SocialPlatform;

#[component]
fn StrokeIcon(children: Element) -> Element {
    rsx! {
        svg {
            class: "c-icon",
            "xmlns": "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ChevronLeftIcon() -> Element {
    rsx! {
        StrokeIcon { path { d: "m15 18-6-6 6-6" } }
    }
}

#[component]
pub fn ChevronRightIcon() -> Element {
    rsx! {
        StrokeIcon { path { d: "m9 18 6-6-6-6" } }
    }
}

#[component]
pub fn SocialIcon(platform: SocialPlatform) -> Element {
    match platform {
        SocialPlatform::Twitter => rsx! {
            StrokeIcon {
                path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
            }
        },
        SocialPlatform::Facebook => rsx! {
            StrokeIcon {
                path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
            }
        },
        SocialPlatform::YouTube => rsx! {
            StrokeIcon {
                path { d: "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17" }
                path { d: "m10 15 5-3-5-3z" }
            }
        },
    }
}
