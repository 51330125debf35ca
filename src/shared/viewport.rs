//! Viewport width observation.
//!
//! A [`ViewportSource`] reports the current width and hands out
//! subscriptions to width changes. A subscription is a guard: the listener
//! stays registered for as long as the guard lives and is removed when it is
//! dropped, whatever path the owner takes to teardown.

use crate::shared::errors::Result;

/// Callback receiving the new viewport width in logical pixels
pub type WidthCallback = Box<dyn FnMut(f64)>;

pub trait ViewportSource {
    /// Guard keeping the listener registered
    type Subscription: 'static;

    /// Current width, if the host exposes one
    fn width(&self) -> Option<f64>;

    /// Register `on_change` for width changes
    fn subscribe(&self, on_change: WidthCallback) -> Result<Self::Subscription>;
}

/// Viewport for hosts without a window (server-side rendering).
/// Reports no width and never notifies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessViewport;

impl ViewportSource for HeadlessViewport {
    type Subscription = ();

    fn width(&self) -> Option<f64> {
        None
    }

    fn subscribe(&self, _on_change: WidthCallback) -> Result<()> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserViewport, ResizeSubscription};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ViewportSource, WidthCallback};
    use crate::shared::constants::RESIZE_EVENT;
    use crate::shared::errors::{AppError, Result};
    use crate::shared::logging::{log_listener_error, log_listener_registered, log_listener_released};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    /// `window.innerWidth` plus the window `resize` event
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserViewport;

    fn inner_width(window: &web_sys::Window) -> Option<f64> {
        window.inner_width().ok().and_then(|width| width.as_f64())
    }

    impl ViewportSource for BrowserViewport {
        type Subscription = ResizeSubscription;

        fn width(&self) -> Option<f64> {
            web_sys::window().as_ref().and_then(inner_width)
        }

        fn subscribe(&self, mut on_change: WidthCallback) -> Result<ResizeSubscription> {
            let window = web_sys::window().ok_or(AppError::WindowUnavailable)?;

            let reader = window.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(width) = inner_width(&reader) {
                    on_change(width);
                }
            });

            window
                .add_event_listener_with_callback(RESIZE_EVENT, callback.as_ref().unchecked_ref())
                .map_err(|e| AppError::ListenerRegistration(format!("{:?}", e)))?;
            log_listener_registered(RESIZE_EVENT);

            Ok(ResizeSubscription { window, callback })
        }
    }

    /// Registered `resize` listener; removed on drop
    pub struct ResizeSubscription {
        window: web_sys::Window,
        callback: Closure<dyn FnMut()>,
    }

    impl Drop for ResizeSubscription {
        fn drop(&mut self) {
            match self
                .window
                .remove_event_listener_with_callback(RESIZE_EVENT, self.callback.as_ref().unchecked_ref())
            {
                Ok(()) => log_listener_released(RESIZE_EVENT),
                Err(e) => log_listener_error(
                    RESIZE_EVENT,
                    &AppError::ListenerRemoval(format!("{:?}", e)),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MenuVisibility;
    use crate::shared::testing::ManualViewport;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_headless_viewport() {
        let viewport = HeadlessViewport;
        assert_eq!(viewport.width(), None);
        assert!(viewport.subscribe(Box::new(|_: f64| {})).is_ok());
    }

    #[test]
    fn test_subscription_receives_changes() {
        let viewport = ManualViewport::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _subscription = viewport
            .subscribe(Box::new(move |w: f64| sink.borrow_mut().push(w)))
            .unwrap();

        viewport.resize(500.0);
        viewport.resize(1024.0);
        assert_eq!(*seen.borrow(), vec![500.0, 1024.0]);
        assert_eq!(viewport.width(), Some(1024.0));
    }

    #[test]
    fn test_dropping_subscription_deregisters() {
        let viewport = ManualViewport::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = calls.clone();
        let subscription = viewport
            .subscribe(Box::new(move |_: f64| *counter.borrow_mut() += 1))
            .unwrap();
        assert_eq!(viewport.listener_count(), 1);

        viewport.resize(600.0);
        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);

        viewport.resize(900.0);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_observer_drives_menu_closed() {
        let viewport = ManualViewport::default();
        let menu = Rc::new(RefCell::new(MenuVisibility::default()));

        let observed = menu.clone();
        let _subscription = viewport
            .subscribe(Box::new(move |w: f64| {
                observed.borrow_mut().on_viewport_change(w);
            }))
            .unwrap();

        viewport.resize(500.0);
        menu.borrow_mut().toggle();
        assert!(menu.borrow().is_open());

        viewport.resize(1024.0);
        assert!(!menu.borrow().is_open());
    }
}
