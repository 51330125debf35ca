use dioxus::prelude::*;
use std::rc::Rc;

use crate::shared::constants::{RESIZE_EVENT, WIDE_VIEWPORT_FALLBACK_PX};
use crate::shared::logging::{log_listener_error, log_viewport_change};
use crate::shared::viewport::ViewportSource;

#[cfg(target_arch = "wasm32")]
type HostViewport = crate::shared::viewport::BrowserViewport;
#[cfg(not(target_arch = "wasm32"))]
type HostViewport = crate::shared::viewport::HeadlessViewport;

/// Current viewport width of the host, kept up to date on resize.
///
/// On the server there is no window, so the width stays at the wide
/// fallback.
pub fn use_viewport_width() -> Signal<f64> {
    use_viewport_width_from(HostViewport::default())
}

/// Subscribe a width signal to `source`.
///
/// The subscription is created on first render and stored in the hook slot;
/// it is dropped with the component scope, which deregisters the listener.
/// A failed registration is logged and leaves the width frozen.
pub fn use_viewport_width_from<S>(source: S) -> Signal<f64>
where
    S: ViewportSource + 'static,
{
    let mut width = use_signal(|| source.width().unwrap_or(WIDE_VIEWPORT_FALLBACK_PX));

    use_hook(move || {
        let subscription = source
            .subscribe(Box::new(move |new_width: f64| {
                log_viewport_change(new_width);
                width.set(new_width);
            }))
            .inspect_err(|err| log_listener_error(RESIZE_EVENT, err))
            .ok();
        Rc::new(subscription)
    });

    width
}
