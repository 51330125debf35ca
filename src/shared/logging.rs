//! Structured logging helpers for the landing site.
//!
//! Keeps field names consistent across navigation, carousel and
//! viewport-listener events. Uses tracing with structured fields; on the
//! server they go through the fmt subscriber, in the browser through the
//! Dioxus logger.

use crate::shared::errors::AppError;

/// Operation tag attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuToggle,
    ViewportChange,
    LinkSelection,
    CarouselMove,
    ListenerLifecycle,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::ViewportChange => "viewport_change",
            LogOperation::LinkSelection => "link_selection",
            LogOperation::CarouselMove => "carousel_move",
            LogOperation::ListenerLifecycle => "listener_lifecycle",
        }
    }
}

/// Log the menu flag after a toggle
pub fn log_menu_toggled(is_open: bool) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        is_open = is_open,
        "Navigation menu toggled"
    );
}

/// Log an observed viewport width
pub fn log_viewport_change(width: f64) {
    tracing::trace!(
        operation = LogOperation::ViewportChange.as_str(),
        width = width,
        "Viewport width changed"
    );
}

/// Log the panel being closed because the viewport widened
pub fn log_menu_forced_closed(width: f64) {
    tracing::debug!(
        operation = LogOperation::ViewportChange.as_str(),
        width = width,
        "Viewport widened past breakpoint, closing navigation panel"
    );
}

/// Log a destination picked from the slide-out panel
pub fn log_link_selected(href: &str) {
    tracing::debug!(
        operation = LogOperation::LinkSelection.as_str(),
        href = href,
        "Navigation link selected from panel"
    );
}

/// Log a carousel position change
pub fn log_carousel_moved(index: usize, len: usize) {
    tracing::trace!(
        operation = LogOperation::CarouselMove.as_str(),
        index = index,
        len = len,
        "Carousel moved"
    );
}

/// Log a DOM listener registration
pub fn log_listener_registered(event: &str) {
    tracing::debug!(
        operation = LogOperation::ListenerLifecycle.as_str(),
        event = event,
        "Event listener registered"
    );
}

/// Log a DOM listener removal
pub fn log_listener_released(event: &str) {
    tracing::debug!(
        operation = LogOperation::ListenerLifecycle.as_str(),
        event = event,
        "Event listener released"
    );
}

/// Log a listener failure; the caller carries on without a subscription
pub fn log_listener_error(event: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::ListenerLifecycle.as_str(),
        event = event,
        error = %error,
        "Event listener unavailable"
    );
}
