use crate::shared::constants::NAV_BREAKPOINT_PX;

/// Layout class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Below the breakpoint: links live in the slide-out panel
    Narrow,
    /// At or above the breakpoint: links are shown inline
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width >= NAV_BREAKPOINT_PX {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, ViewportClass::Wide)
    }
}

/// Which parts of the navigation bar are visible for a given width.
///
/// Only `slide_out_panel` is read when rendering. `inline_links` and
/// `toggle_control` are applied by the 768px media queries in navbar.css so
/// the server markup does not depend on the width; here they record what
/// those rules show and are checked in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPresentation {
    pub inline_links: bool,
    pub toggle_control: bool,
    pub slide_out_panel: bool,
}

/// Open/closed state of the narrow-viewport navigation panel.
///
/// Owned by a single navigation bar and updated from two places: the toggle
/// control and the viewport observer. Whenever the observed width reaches
/// the breakpoint the panel is closed, so it can never stay open while
/// hidden by the wide layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuVisibility {
    is_open: bool,
}

impl MenuVisibility {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Invert the flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Apply an observed viewport width.
    ///
    /// Wide widths force the panel closed; narrow widths leave it alone.
    /// Returns `true` when this call closed an open panel.
    pub fn on_viewport_change(&mut self, width: f64) -> bool {
        if !ViewportClass::from_width(width).is_wide() {
            return false;
        }
        let was_open = self.is_open;
        self.is_open = false;
        was_open
    }

    /// A destination was picked from the panel: the panel always collapses.
    pub fn select_link(&mut self) {
        self.is_open = false;
    }

    pub fn presentation(&self, width: f64) -> NavPresentation {
        match ViewportClass::from_width(width) {
            ViewportClass::Wide => NavPresentation {
                inline_links: true,
                toggle_control: false,
                slide_out_panel: false,
            },
            ViewportClass::Narrow => NavPresentation {
                inline_links: false,
                toggle_control: true,
                slide_out_panel: self.is_open,
            },
        }
    }
}
