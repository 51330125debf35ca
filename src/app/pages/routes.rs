use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::SiteHeader;
use crate::app::pages::{ComingSoon, Home};
use crate::app::sections::SiteFooter;
use crate::config::SiteConfig;
use crate::shared::constants::FAVICON_PATH;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    // Landing page
    #[route("/")]
    Home {},

    // Every other destination linked from the page
    #[route("/:..segments")]
    ComingSoon { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        SiteConfig::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Invalid site configuration, falling back to defaults");
            SiteConfig::default()
        })
    });

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    // Produced by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context::<SiteConfig>();

    rsx! {
        document::Title { "{config.site_title}" }
        document::Link { rel: "icon", r#type: "image/png", href: FAVICON_PATH }
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }

        div { class: "c-site",
            SiteHeader {}
            main { class: "c-site__main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}
