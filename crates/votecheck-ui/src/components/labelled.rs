//! Labelled Field Component
//!
//! Wraps any form control with:
//! - A label, with an asterisk when the field is required
//! - An optional note beneath the control
//! - One line per validation error, in the order given

use dioxus::prelude::*;

/// Properties for the LabelledField component
#[derive(Clone, PartialEq, Props)]
pub struct LabelledFieldProps {
    /// Label text
    pub label: String,
    /// Help text shown under the control
    #[props(default)]
    pub note: Option<String>,
    /// Show the required marker
    #[props(default = false)]
    pub required: bool,
    /// Lay the field out as a flex item (side-by-side fields)
    #[props(default = false)]
    pub flex: bool,
    /// Validation errors, one line each
    #[props(default)]
    pub errors: Vec<String>,
    /// The wrapped control
    pub children: Element,
}

/// CSS classes of the field wrapper
pub fn field_class(flex: bool, has_errors: bool) -> String {
    let mut class = String::from("labelled");
    if flex {
        class.push_str(" labelled-flex");
    }
    if has_errors {
        class.push_str(" has-errors");
    }
    class
}

/// Label, control, note and errors for one form field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LabelledField {
///         label: "Zip Code".to_string(),
///         errors: flow().errors_for(FieldName::ZipCode).to_vec(),
///         input { r#type: "text" }
///     }
/// }
/// ```
#[component]
pub fn LabelledField(props: LabelledFieldProps) -> Element {
    let class = field_class(props.flex, !props.errors.is_empty());

    rsx! {
        div { class: "{class}",
            label { class: "labelled-label",
                span { class: "labelled-text", "{props.label}" }
                if props.required {
                    span { class: "labelled-required", "aria-hidden": "true", " *" }
                }
                {props.children}
            }
            if let Some(note) = &props.note {
                p { class: "labelled-note", "{note}" }
            }
            if !props.errors.is_empty() {
                ul { class: "labelled-errors", role: "alert",
                    for error in props.errors.iter() {
                        li { class: "labelled-error", "{error}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_class_flags() {
        assert_eq!(field_class(false, false), "labelled");
        assert_eq!(field_class(true, false), "labelled labelled-flex");
        assert_eq!(field_class(false, true), "labelled has-errors");
        assert_eq!(field_class(true, true), "labelled labelled-flex has-errors");
    }
}
