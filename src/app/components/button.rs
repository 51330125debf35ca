use dioxus::prelude::*;

use crate::domain::models::{LinkKind, NavLink};

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Outline => "c-button--outline",
            ButtonVariant::Ghost => "c-button--ghost",
        }
    }
}

impl From<LinkKind> for ButtonVariant {
    fn from(kind: LinkKind) -> Self {
        match kind {
            LinkKind::CallToAction => ButtonVariant::Primary,
            LinkKind::Plain => ButtonVariant::Outline,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Regular,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Regular => "",
            ButtonSize::Large => "c-button--lg",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "button",
            aria_label: aria_label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Router link styled as a button. The variant follows the link kind unless
/// overridden.
#[component]
pub fn ButtonLink(
    link: NavLink,
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let variant_class = variant.unwrap_or_else(|| link.kind.into()).class();
    let size_class = size.unwrap_or(ButtonSize::Regular).class();

    rsx! {
        Link {
            to: link.href,
            class: "c-button {variant_class} {size_class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            "{link.label}"
        }
    }
}
