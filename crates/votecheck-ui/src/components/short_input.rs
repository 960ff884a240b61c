//! Short Text Input Component
//!
//! Single-line controlled input for text, email and numbers.
//! Features:
//! - Focuses itself once on mount when asked to
//! - Numeric coercion for `input_type: "number"` (NaN passes through)
//! - Stable class marker derived from the label, e.g. `first-name`
//! - `aria-invalid` / `aria-required` mirrored from props
//! - Optional children drawn in an icon slot over the right edge

use std::rc::Rc;

use dioxus::prelude::*;
use votecheck_core::{coerce_input, dashify, FieldValue};

use super::LabelledField;

/// Properties for the ShortTextInput component
#[derive(Clone, PartialEq, Props)]
pub struct ShortTextInputProps {
    /// Called on every change with the coerced value
    pub on_change: EventHandler<FieldValue>,
    /// Label text; also the source of the class marker
    pub label: String,
    /// Focus the control once, right after mount
    #[props(default = false)]
    pub autofocus: bool,
    /// Validation errors listed under the control
    #[props(default)]
    pub errors: Vec<String>,
    #[props(default = false)]
    pub flex: bool,
    /// Receives the mounted control so a parent can focus it later
    #[props(default)]
    pub input_ref: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)]
    pub note: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    /// Input type; `"number"` switches on integer coercion
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Current value (controlled)
    #[props(default)]
    pub value: String,
    /// Autocomplete hint, e.g. `given-name`
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Icon shown inside the control, e.g. a status mark
    pub children: Option<Element>,
}

/// Remembers whether the mount-time focus is still owed.
///
/// Mount callbacks can fire again when the element is re-created; focus is
/// only taken the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutofocusLatch {
    pending: bool,
}

impl AutofocusLatch {
    pub fn new(autofocus: bool) -> Self {
        Self { pending: autofocus }
    }

    /// True exactly once when autofocus was requested
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }
}

/// CSS classes of the input element
pub fn input_class(label: &str, has_errors: bool) -> String {
    let marker = dashify(label);
    let mut class = String::from("short-input");
    if !marker.is_empty() {
        class.push(' ');
        class.push_str(&marker);
    }
    if has_errors {
        class.push_str(" has-errors");
    }
    class
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// let mut flow = use_signal(CheckFlow::new);
///
/// rsx! {
///     ShortTextInput {
///         label: "Zip Code".to_string(),
///         value: flow().zip_code().to_string(),
///         errors: flow().errors_for(FieldName::ZipCode).to_vec(),
///         autocomplete: "postal-code".to_string(),
///         on_change: move |v: FieldValue| flow.write().apply(FieldUpdate::ZipCode(v.into_text())),
///     }
/// }
/// ```
#[component]
pub fn ShortTextInput(props: ShortTextInputProps) -> Element {
    let mut latch = use_signal(|| AutofocusLatch::new(props.autofocus));
    let has_errors = !props.errors.is_empty();
    let class = input_class(&props.label, has_errors);
    let input_ref = props.input_ref;
    let on_change = props.on_change;
    let input_type = props.input_type.clone();
    let icon = props.children.clone();

    rsx! {
        LabelledField {
            label: props.label.clone(),
            note: props.note.clone(),
            required: props.required,
            flex: props.flex,
            errors: props.errors.clone(),
            input {
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("on"),
                "aria-invalid": "{has_errors}",
                "aria-required": "{props.required}",
                onmounted: move |event: MountedEvent| {
                    let element = event.data();
                    if let Some(handler) = input_ref {
                        handler.call(element.clone());
                    }
                    let focus = latch.write().take();
                    async move {
                        if focus {
                            if let Err(err) = element.set_focus(true).await {
                                tracing::warn!("Autofocus failed: {:?}", err);
                            }
                        }
                    }
                },
                oninput: move |event: FormEvent| {
                    on_change.call(coerce_input(&input_type, &event.value()));
                },
            }
            {icon.map(|icon| rsx! {
                div { class: "short-input-icon", {icon} }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = AutofocusLatch::new(true);
        assert!(latch.take());
        assert!(!latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn latch_never_fires_without_autofocus() {
        let mut latch = AutofocusLatch::new(false);
        assert!(!latch.take());
    }

    #[test]
    fn input_class_carries_marker() {
        assert_eq!(input_class("First Name", false), "short-input first-name");
        assert_eq!(input_class("Zip Code", true), "short-input zip-code has-errors");
        assert_eq!(input_class("", false), "short-input");
    }
}
