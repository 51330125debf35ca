use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, ChevronLeftIcon, ChevronRightIcon};
use crate::domain::content::TESTIMONIALS;
use crate::domain::models::Testimonial;
use crate::shared::hooks::use_carousel;

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "c-section",
            div { class: "c-section__inner",
                h2 { class: "c-section__title", "Community Testimonials" }
                TestimonialCarousel { testimonials: TESTIMONIALS }
            }
        }
    }
}

/// One testimonial per slide. Every slide is rendered; the track is shifted
/// so only the current one is in view.
#[component]
pub fn TestimonialCarousel(testimonials: &'static [Testimonial]) -> Element {
    let mut carousel = use_carousel(testimonials.len());
    let current = carousel.index();
    let offset = carousel.position.read().track_offset_percent();

    rsx! {
        div {
            class: "c-carousel",
            role: "region",
            aria_roledescription: "carousel",
            div { class: "c-carousel__viewport",
                div {
                    class: "c-carousel__track",
                    style: "transform: translateX(-{offset}%);",
                    for (index, testimonial) in testimonials.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "c-carousel__slide",
                            role: "group",
                            aria_roledescription: "slide",
                            aria_hidden: (index != current).to_string(),
                            Card { centered: true,
                                p { class: "c-testimonial__quote", "\"{testimonial.quote}\"" }
                                p { class: "c-testimonial__author", "{testimonial.author}" }
                            }
                        }
                    }
                }
            }

            if testimonials.len() > 1 {
                div { class: "c-carousel__controls",
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: "Previous slide".to_string(),
                        onclick: move |_| carousel.prev(),
                        ChevronLeftIcon {}
                    }
                    div { class: "c-carousel__dots",
                        for index in 0..testimonials.len() {
                            button {
                                key: "{index}",
                                r#type: "button",
                                class: dot_class(index == current),
                                aria_label: format!("Go to slide {}", index + 1),
                                onclick: move |_| carousel.go_to(index),
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: "Next slide".to_string(),
                        onclick: move |_| carousel.next(),
                        ChevronRightIcon {}
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "c-carousel__dot c-carousel__dot--active"
    } else {
        "c-carousel__dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[Testimonial] = &[
        Testimonial { quote: "Great soil tips", author: "Ana, Orchard Keeper" },
        Testimonial { quote: "Found a buyer fast", author: "Ben, Dairy Farmer" },
    ];

    #[test]
    fn test_carousel_renders_every_testimonial_in_order() {
        let html = dioxus_ssr::render_element(rsx! {
            TestimonialCarousel { testimonials: SAMPLE }
        });

        assert_eq!(html.matches("c-carousel__slide").count(), 2);
        let first = html.find("Great soil tips").unwrap();
        let second = html.find("Found a buyer fast").unwrap();
        assert!(first < second);
        assert!(html.contains("Ana, Orchard Keeper"));
        assert!(html.contains("translateX(-0%)"));
    }

    #[test]
    fn test_single_testimonial_has_no_controls() {
        let html = dioxus_ssr::render_element(rsx! {
            TestimonialCarousel { testimonials: &SAMPLE[..1] }
        });
        assert!(!html.contains("c-carousel__controls"));
    }
}
