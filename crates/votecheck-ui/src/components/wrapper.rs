//! Page content wrapper

use dioxus::prelude::*;

/// Properties for the ContentWrapper component
#[derive(Clone, PartialEq, Props)]
pub struct ContentWrapperProps {
    /// Background color behind the centered box
    #[props(default)]
    pub background: Option<String>,
    pub children: Element,
}

/// Centered, width-limited box every page renders into
#[component]
pub fn ContentWrapper(props: ContentWrapperProps) -> Element {
    let style = props
        .background
        .as_deref()
        .map(|color| format!("background-color: {color};"))
        .unwrap_or_default();

    rsx! {
        main { class: "content-wrapper", style: "{style}",
            div { class: "centered-box", {props.children} }
        }
    }
}
