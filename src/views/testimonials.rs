use crate::catalog::testimonials::{Testimonial, TESTIMONIALS};
use crate::clock::{repeat_every, SharedClock};
use crate::common::StateCell;
use crate::services::Services;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaStar, Icon};
use std::{ops::ControlFlow, time::Duration};

/// Index of the featured testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}

/// Rotate forever; the owning component's scope cancels the task on unmount.
pub async fn rotate<S>(clock: SharedClock, interval: Duration, mut carousel: S)
where
    S: StateCell<Carousel>,
{
    repeat_every(clock, interval, move || {
        carousel.apply(Carousel::advance);
        ControlFlow::Continue(())
    })
    .await;
}

#[component]
pub fn TestimonialsSection() -> Element {
    let services = use_context::<Services>();
    let mut carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));

    use_hook(move || {
        spawn(rotate(
            services.clock.clone(),
            services.config.carousel_interval,
            carousel,
        ))
    });

    let active = carousel().active();
    let featured = TESTIMONIALS.get(active).copied();

    rsx! {
        section { id: "testimonials", class: "relative w-full py-24 bg-background overflow-hidden",
            div { class: "container mx-auto px-4 md:px-6",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4 text-text-primary", "Success Stories" }
                    p { class: "text-lg text-text-secondary max-w-3xl mx-auto",
                        "See how professionals across the industry are transforming their workflows with our Revit plugin"
                    }
                }

                if let Some(testimonial) = featured {
                    FeaturedTestimonial { testimonial }
                }

                div { class: "flex justify-center gap-2 mt-8",
                    for index in 0..TESTIMONIALS.len() {
                        button {
                            key: "{index}",
                            class: "h-2 rounded-full transition-all duration-300",
                            class: if index == active { "w-8 bg-primary-500" } else { "w-2 bg-border" },
                            "aria-label": "Show testimonial {index + 1}",
                            onclick: move |_| carousel.write().select(index),
                        }
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mt-16",
                    for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "testimonial-card p-6 rounded-xl border bg-background-card cursor-pointer transition-colors",
                            class: if index == active { "border-primary-500" } else { "border-border" },
                            onclick: move |_| carousel.write().select(index),
                            div { class: "flex items-center gap-3 mb-3",
                                img {
                                    class: "w-10 h-10 rounded-full bg-background-medium",
                                    src: "{testimonial.avatar}",
                                    alt: "{testimonial.name}",
                                }
                                div {
                                    p { class: "font-medium text-sm", "{testimonial.name}" }
                                    p { class: "text-xs text-text-muted", "{testimonial.company}" }
                                }
                            }
                            p { class: "text-sm text-text-secondary line-clamp-3", "{testimonial.content}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedTestimonial(testimonial: Testimonial) -> Element {
    rsx! {
        div { class: "max-w-4xl mx-auto bg-background-card rounded-2xl shadow-lg p-8 md:p-12",
            div { class: "flex flex-col md:flex-row items-center gap-8",
                div { class: "w-24 h-24 rounded-full overflow-hidden bg-background-medium flex items-center justify-center text-3xl font-bold",
                    img {
                        src: "{testimonial.avatar}",
                        alt: "{testimonial.name}",
                        class: "w-full h-full",
                        title: "{testimonial.initial()}",
                    }
                }
                div { class: "flex-1",
                    div { class: "flex gap-1 mb-4",
                        for i in 0..5 {
                            Icon {
                                key: "{i}",
                                icon: FaStar,
                                width: 18,
                                height: 18,
                                class: "text-accent-amber",
                            }
                        }
                    }
                    blockquote { class: "text-lg md:text-xl italic text-text-primary mb-6",
                        "\"{testimonial.content}\""
                    }
                    p { class: "font-semibold", "{testimonial.name}" }
                    p { class: "text-sm text-text-muted", "{testimonial.role}, {testimonial.company}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::Runtime;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_advance_wraps() {
        let mut carousel = Carousel::new(3);
        let seen: Vec<_> = (0..5)
            .map(|_| {
                carousel.advance();
                carousel.active()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(4);
        carousel.select(2);
        carousel.select(9);
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_rotation_follows_interval() {
        let mut rt = Runtime::new();
        let carousel = Rc::new(RefCell::new(Carousel::new(TESTIMONIALS.len())));
        let clock = rt.clock();
        rt.spawn(rotate(clock, Duration::from_millis(5000), carousel.clone()));

        rt.advance_ms(4999);
        assert_eq!(carousel.borrow().active(), 0);
        rt.advance_ms(1);
        assert_eq!(carousel.borrow().active(), 1);
        rt.advance_ms(5000 * 3);
        assert_eq!(carousel.borrow().active(), 0);
    }
}
