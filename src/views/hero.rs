use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowRight, FaBolt, FaPlay},
    Icon,
};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1545249390-6bdfa286032f?w=800&q=80";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "relative w-full py-20 md:py-32 overflow-hidden bg-background",
            div { class: "container mx-auto px-4 md:px-6 relative z-10",
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-10 items-center",
                    // Text content
                    div { class: "flex flex-col space-y-6",
                        div { class: "inline-flex w-fit items-center px-3 py-1 rounded-full border border-primary-600 text-primary-400 text-sm font-medium",
                            Icon { icon: FaBolt, width: 14, height: 14, class: "mr-2 animate-pulse" }
                            span { "Revolutionary CAD to Revit Conversion" }
                        }
                        h1 { class: "text-4xl md:text-5xl lg:text-6xl font-extrabold tracking-tight text-text-primary",
                            "Transform CAD to Revit"
                            span { class: "block text-primary-400", "In One Click" }
                        }
                        p { class: "text-xl text-text-secondary max-w-xl",
                            "Our plugin uses advanced AI to convert CAD files to native Revit elements with perfect geometry and properties preservation, saving you hours of manual work."
                        }
                        div { class: "flex flex-col sm:flex-row gap-4",
                            a {
                                href: "#download",
                                class: "lightning-border inline-flex items-center justify-center bg-primary-600 hover:bg-primary-500 px-6 py-3 rounded-lg font-semibold transition-colors",
                                "Get Started"
                                Icon { icon: FaArrowRight, width: 14, height: 14, class: "ml-2" }
                            }
                            a {
                                href: "#features",
                                class: "inline-flex items-center justify-center border border-border hover:bg-background-hover px-6 py-3 rounded-lg transition-colors",
                                "Watch Demo"
                                Icon { icon: FaPlay, width: 12, height: 12, class: "ml-2" }
                            }
                        }
                        div { class: "flex items-center gap-4 text-sm text-text-muted",
                            div { class: "flex -space-x-2",
                                for i in 1..=4 {
                                    img {
                                        key: "{i}",
                                        src: "https://api.dicebear.com/7.x/avataaars/svg?seed=user{i}",
                                        alt: "User {i}",
                                        class: "w-8 h-8 rounded-full border-2 border-background",
                                    }
                                }
                            }
                            span { "Trusted by 10,000+ architects & engineers" }
                        }
                    }

                    // Preview
                    div { class: "relative hidden lg:block",
                        div { class: "relative bg-background-card rounded-xl shadow-lg overflow-hidden border border-border",
                            img {
                                src: HERO_IMAGE,
                                alt: "CAD to Revit Conversion",
                                class: "w-full h-auto",
                            }
                            div { class: "absolute bottom-0 inset-x-0 bg-gradient-to-t from-background to-transparent p-6",
                                div { class: "flex items-center justify-between text-sm",
                                    div {
                                        p { class: "font-medium", "Before: CAD Drawing" }
                                        p { class: "text-xs text-text-muted", "2D lines and arcs" }
                                    }
                                    div {
                                        p { class: "font-medium", "After: Revit Model" }
                                        p { class: "text-xs text-text-muted", "3D BIM elements" }
                                    }
                                }
                                div { class: "mt-2 w-full bg-background-medium rounded-full h-1.5",
                                    div { class: "bg-primary-500 h-1.5 rounded-full w-3/4 animate-pulse" }
                                }
                            }
                            div { class: "float-slow absolute top-6 right-6 px-3 py-1.5 bg-primary-600 rounded-md text-sm font-medium shadow-lg flex items-center",
                                Icon { icon: FaBolt, width: 12, height: 12, class: "mr-1.5" }
                                "Intelligent Mapping"
                            }
                        }
                    }
                }
            }
        }
    }
}
