use dioxus::prelude::*;

use crate::domain::models::InfoCard;

#[component]
pub fn Card(
    title: Option<String>,
    centered: Option<bool>,
    children: Element,
) -> Element {
    let centered_class = if centered.unwrap_or(false) { "c-card--centered" } else { "" };

    rsx! {
        div {
            class: "c-card {centered_class}",
            div {
                class: "c-card__body",
                if let Some(title) = title {
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
                {children}
            }
        }
    }
}

/// Three-column grid with one card per entry, in order
#[component]
pub fn CardGrid(entries: &'static [InfoCard], centered: Option<bool>) -> Element {
    let centered = centered.unwrap_or(false);

    rsx! {
        div { class: "c-card-grid",
            for entry in entries.iter() {
                Card {
                    title: entry.title.to_string(),
                    centered: centered,
                    p { class: "c-card__text", "{entry.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[InfoCard] = &[
        InfoCard { title: "Seed Library", description: "Borrow heirloom seeds" },
        InfoCard { title: "Tool Share", description: "Rent equipment from neighbors" },
        InfoCard { title: "Market Days", description: "Sell produce together" },
    ];

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect()
    }

    #[test]
    fn test_card_grid_renders_one_card_per_entry_in_order() {
        let html = dioxus_ssr::render_element(rsx! {
            CardGrid { entries: ENTRIES }
        });

        assert_eq!(html.matches("c-card__title").count(), 3);

        let titles = positions(&html, &["Seed Library", "Tool Share", "Market Days"]);
        assert!(titles.windows(2).all(|w| w[0] < w[1]));

        let descriptions = positions(
            &html,
            &["Borrow heirloom seeds", "Rent equipment from neighbors", "Sell produce together"],
        );
        assert!(descriptions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_card_without_title() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { p { "body only" } }
        });
        assert!(!html.contains("c-card__title"));
        assert!(html.contains("body only"));
    }

    #[test]
    fn test_centered_cards() {
        let html = dioxus_ssr::render_element(rsx! {
            CardGrid { entries: ENTRIES, centered: true }
        });
        assert_eq!(html.matches("c-card--centered").count(), 3);
    }
}
