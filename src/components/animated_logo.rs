use dioxus::prelude::*;

/// Lightning-bolt mark used in the header and footer.
#[component]
pub fn AnimatedLogo(#[props(default = 40)] size: u32) -> Element {
    rsx! {
        svg {
            class: "logo-bolt",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 40 40",
            fill: "none",
            "aria-hidden": "true",
            rect {
                x: "2",
                y: "2",
                width: "36",
                height: "36",
                rx: "8",
                stroke: "#3b82f6",
                "stroke-width": "2",
            }
            path {
                d: "M22 6 L12 22 H19 L17 34 L28 17 H21 Z",
                fill: "#60a5fa",
            }
        }
    }
}
