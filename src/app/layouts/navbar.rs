use dioxus::prelude::*;

use crate::app::components::{ButtonLink, CloseIcon, MenuIcon};
use crate::config::SiteConfig;
use crate::domain::content::NAV_LINKS;
use crate::domain::models::LinkKind;
use crate::shared::constants::LOGO_PATH;
use crate::shared::hooks::{use_navigation_menu, NavigationMenuState};

/// Fixed site header: brand on the left, navigation on the right
#[component]
pub fn SiteHeader() -> Element {
    let config = use_context::<SiteConfig>();
    let logo_alt = format!("{} Logo", config.organization);

    rsx! {
        header { class: "c-header",
            div { class: "c-header__inner",
                Link {
                    to: "/",
                    class: "c-header__brand",
                    img {
                        class: "c-header__logo",
                        src: LOGO_PATH,
                        alt: "{logo_alt}",
                        width: "40",
                        height: "40",
                    }
                    span { class: "c-header__title", "{config.brand_text()}" }
                }
                NavigationMenu {}
            }
        }
    }
}

/// Responsive navigation bound to the host viewport
#[component]
pub fn NavigationMenu() -> Element {
    let menu = use_navigation_menu();
    rsx! {
        NavigationBar { menu }
    }
}

/// Navigation markup for a given menu state.
///
/// The inline list and the toggle control are both always in the DOM; the
/// 768px media queries in navbar.css show exactly one of them. The slide-out
/// panel is only mounted while the menu is open on a narrow viewport.
#[component]
pub fn NavigationBar(menu: NavigationMenuState) -> Element {
    let mut menu = menu;
    let is_open = menu.is_open();
    let presentation = menu.presentation();

    let toggle_label = if is_open { "Close menu" } else { "Open menu" };

    rsx! {
        nav { class: "c-navbar", aria_label: "Main navigation",
            ul { class: "c-navbar__links",
                for link in NAV_LINKS.iter().copied() {
                    li { key: "{link.href}",
                        if link.kind == LinkKind::CallToAction {
                            ButtonLink { link: link }
                        } else {
                            Link { to: link.href, class: "c-navbar__link", "{link.label}" }
                        }
                    }
                }
            }

            button {
                class: "c-navbar__toggle",
                r#type: "button",
                aria_label: toggle_label,
                aria_expanded: is_open.to_string(),
                aria_controls: "mobile-navigation",
                onclick: move |_| menu.toggle(),
                if is_open {
                    CloseIcon {}
                } else {
                    MenuIcon {}
                }
            }

            if presentation.slide_out_panel {
                div { id: "mobile-navigation", class: "c-navbar__panel",
                    ul { class: "c-navbar__panel-links",
                        for link in NAV_LINKS.iter().copied() {
                            li { key: "{link.href}",
                                if link.kind == LinkKind::CallToAction {
                                    ButtonLink {
                                        link: link,
                                        onclick: move |_| menu.select_link(link.href),
                                    }
                                } else {
                                    Link {
                                        to: link.href,
                                        class: "c-navbar__panel-link",
                                        onclick: move |_| menu.select_link(link.href),
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::hooks::use_navigation_menu_from;
    use crate::shared::testing::{settle, ManualViewport};
    use dioxus::dioxus_core::{AttributeValue, ElementId, Event, Mutation, Mutations, VirtualDom};
    use dioxus::html::geometry::{ClientPoint, Coordinates, ElementPoint, PagePoint, ScreenPoint};
    use dioxus::html::input_data::{MouseButton, MouseButtonSet};
    use dioxus::html::{
        Modifiers, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
        set_event_converter,
    };
    use std::any::Any;
    use std::rc::Rc;

    const NARROW_PX: f64 = 500.0;

    #[derive(Routable, Clone, PartialEq, Debug)]
    enum MenuRoute {
        #[layout(MenuShell)]
        #[route("/")]
        Landing {},
        #[route("/:..segments")]
        Elsewhere { segments: Vec<String> },
    }

    #[component]
    fn MenuShell() -> Element {
        let menu = use_navigation_menu_from(ManualViewport::new(NARROW_PX));
        rsx! {
            NavigationBar { menu }
            Outlet::<MenuRoute> {}
        }
    }

    #[component]
    fn Landing() -> Element {
        rsx! {}
    }

    #[component]
    fn Elsewhere(segments: Vec<String>) -> Element {
        let path = segments.join("/");
        rsx! {
            p { "Viewing {path}" }
        }
    }

    fn menu_app() -> Element {
        rsx! { Router::<MenuRoute> {} }
    }

    /// Element carrying `name` set to `value` in a batch of edits
    fn element_with(mutations: &Mutations, name: &str, value: &str) -> ElementId {
        mutations
            .edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: attr,
                    value: AttributeValue::Text(text),
                    id,
                    ..
                } if *attr == name && text == value => Some(*id),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no element with {name}={value}"))
    }

    fn left_click(dom: &VirtualDom, element: ElementId) {
        let data = SerializedMouseData::new(
            Some(MouseButton::Primary),
            MouseButtonSet::empty(),
            Coordinates::new(
                ScreenPoint::zero(),
                ClientPoint::zero(),
                ElementPoint::zero(),
                PagePoint::zero(),
            ),
            Modifiers::empty(),
        );
        let event: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(data)));
        dom.runtime().handle_event("click", Event::new(event, true), element);
    }

    #[test]
    fn test_closed_menu_has_no_panel() {
        let mut dom = VirtualDom::new(menu_app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(!html.contains("c-navbar__panel"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert_eq!(html.matches("class=\"c-navbar__link\"").count(), 4);
    }

    #[test]
    fn test_panel_link_click_closes_menu() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(menu_app);
        let created = dom.rebuild_to_vec();
        settle(&mut dom);
        let toggle = element_with(&created, "aria-expanded", "false");

        left_click(&dom, toggle);
        let opened = dom.render_immediate_to_vec();
        settle(&mut dom);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("c-navbar__panel"));
        assert!(html.contains("aria-expanded=\"true\""));
        assert_eq!(html.matches("class=\"c-navbar__panel-link\"").count(), 4);

        // The panel's About link; the inline one was created before the toggle
        let about = element_with(&opened, "href", "/about");
        left_click(&dom, about);
        settle(&mut dom);

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("c-navbar__panel"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("Viewing about"));
    }
}
