//! Button Component
//!
//! Three themes, matching the roles buttons play on a page:
//! - Primary: the page's main action (orange)
//! - Success: the follow-up action after a positive result (green)
//! - Transparent: secondary actions such as "Back"

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Transparent,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Transparent => "btn-transparent",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Forms disable their submit button while a request is in flight
    #[props(default)]
    pub disabled: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Layout classes appended after the variant class
    #[props(default)]
    pub class: Option<String>,
}

/// Class list for a button: the variant class, then any extras
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{} {extra}", variant.class()),
        None => variant.class().to_string(),
    }
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Success,
///         button_type: "submit".to_string(),
///         disabled: !flow().can_submit(),
///         "Sign Up"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-disabled": "{props.disabled}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Success.class(), "btn-success");
        assert_eq!(ButtonVariant::Transparent.class(), "btn-transparent");
    }

    #[test]
    fn extra_classes_follow_the_variant() {
        assert_eq!(
            button_class(ButtonVariant::Primary, Some("float-right")),
            "btn-primary float-right"
        );
        assert_eq!(button_class(ButtonVariant::Success, Some("  ")), "btn-success");
        assert_eq!(button_class(ButtonVariant::Transparent, None), "btn-transparent");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
