use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::components::SocialIcon;
use crate::config::SiteConfig;
use crate::domain::content::{FOOTER_COLUMNS, SOCIAL_HEADING, SOCIAL_LINKS};

#[component]
pub fn SiteFooter() -> Element {
    let config = use_context::<SiteConfig>();
    // Computed once on the server and replayed during hydration
    let year = use_server_cached(current_year);
    let copyright = copyright_line(&config.organization, year);

    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__inner",
                div { class: "c-footer__columns",
                    for column in FOOTER_COLUMNS.iter() {
                        div { key: "{column.heading}", class: "c-footer__column",
                            h3 { class: "c-footer__heading", "{column.heading}" }
                            ul { class: "c-footer__links",
                                for link in column.links.iter() {
                                    li { key: "{link.href}",
                                        Link { to: link.href, class: "c-footer__link", "{link.label}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "c-footer__column",
                        h3 { class: "c-footer__heading", "{SOCIAL_HEADING}" }
                        div { class: "c-footer__social",
                            for social in SOCIAL_LINKS.iter() {
                                a {
                                    key: "{social.platform.aria_label()}",
                                    class: "c-footer__social-link",
                                    href: social.href,
                                    aria_label: social.platform.aria_label(),
                                    SocialIcon { platform: social.platform }
                                }
                            }
                        }
                    }
                }
                div { class: "c-footer__bottom",
                    p { "{copyright}" }
                }
            }
        }
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

fn copyright_line(organization: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, organization)
}
