use dioxus::prelude::*;

use crate::domain::models::{MenuVisibility, NavPresentation};
use crate::shared::hooks::{use_viewport_width, use_viewport_width_from};
use crate::shared::logging::{log_link_selected, log_menu_forced_closed, log_menu_toggled};
use crate::shared::viewport::ViewportSource;

/// Navigation menu state owned by one navigation bar
#[derive(Clone, Copy, PartialEq)]
pub struct NavigationMenuState {
    pub visibility: Signal<MenuVisibility>,
    pub viewport_width: Signal<f64>,
}

impl NavigationMenuState {
    pub fn is_open(&self) -> bool {
        self.visibility.read().is_open()
    }

    /// Visibility of the inline list, toggle control and panel right now
    pub fn presentation(&self) -> NavPresentation {
        self.visibility.read().presentation((self.viewport_width)())
    }

    /// Open or close the slide-out panel
    pub fn toggle(&mut self) {
        let is_open = self.visibility.write().toggle();
        log_menu_toggled(is_open);
    }

    /// A link in the slide-out panel was activated
    pub fn select_link(&mut self, href: &str) {
        log_link_selected(href);
        self.visibility.write().select_link();
    }
}

/// Hook wiring the menu flag to the toggle control and the viewport observer.
///
/// Every observed width is fed to [`MenuVisibility::on_viewport_change`],
/// so widening past the breakpoint closes the panel without a toggle.
pub fn use_navigation_menu() -> NavigationMenuState {
    let viewport_width = use_viewport_width();
    use_menu_state(viewport_width)
}

/// [`use_navigation_menu`] observing an explicit viewport source
pub fn use_navigation_menu_from<S>(source: S) -> NavigationMenuState
where
    S: ViewportSource + 'static,
{
    let viewport_width = use_viewport_width_from(source);
    use_menu_state(viewport_width)
}

fn use_menu_state(viewport_width: Signal<f64>) -> NavigationMenuState {
    let mut visibility = use_signal(MenuVisibility::default);

    use_effect(move || {
        let width = viewport_width();
        // Work on a copy so narrow widths don't mark the flag dirty
        let mut next = *visibility.peek();
        if next.on_viewport_change(width) {
            log_menu_forced_closed(width);
            visibility.set(next);
        }
    });

    NavigationMenuState {
        visibility,
        viewport_width,
    }
}
