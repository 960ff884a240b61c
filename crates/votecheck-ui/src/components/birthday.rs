//! Birthday Input Component
//!
//! Month, day and year entered as three small numeric boxes under one label.
//! The composed date is reported on every change; until all three parts form
//! a real date the reported value is `FieldValue::Empty`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use votecheck_core::{dashify, parse_int, DateParts, FieldValue};

use super::LabelledField;

/// One of the three birthday boxes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DatePart {
    Month,
    Day,
    Year,
}

impl DatePart {
    pub fn placeholder(&self) -> &'static str {
        match self {
            DatePart::Month => "MM",
            DatePart::Day => "DD",
            DatePart::Year => "YYYY",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            DatePart::Month => "Month",
            DatePart::Day => "Day",
            DatePart::Year => "Year",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            DatePart::Month => "short-input birthday-month",
            DatePart::Day => "short-input birthday-day",
            DatePart::Year => "short-input birthday-year",
        }
    }
}

/// Raw text of the three boxes, kept as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BirthdayText {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl BirthdayText {
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        let parts = DateParts::from_date(date);
        Self {
            month: parts.month.map(|m| m.to_string()).unwrap_or_default(),
            day: parts.day.map(|d| d.to_string()).unwrap_or_default(),
            year: parts.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, part: DatePart) -> &str {
        match part {
            DatePart::Month => &self.month,
            DatePart::Day => &self.day,
            DatePart::Year => &self.year,
        }
    }

    pub fn set(&mut self, part: DatePart, raw: String) {
        match part {
            DatePart::Month => self.month = raw,
            DatePart::Day => self.day = raw,
            DatePart::Year => self.year = raw,
        }
    }

    /// Parsed parts; unparsable boxes count as missing
    pub fn parts(&self) -> DateParts {
        let mut parts = DateParts::default();
        parts.set_month(parse_int(&self.month));
        parts.set_day(parse_int(&self.day));
        parts.set_year(parse_int(&self.year));
        parts
    }

    pub fn value(&self) -> FieldValue {
        self.parts().to_value()
    }
}

/// Properties for the BirthdayInput component
#[derive(Clone, PartialEq, Props)]
pub struct BirthdayInputProps {
    pub label: String,
    /// Called with `Date` once complete, `Empty` otherwise
    pub on_change: EventHandler<FieldValue>,
    /// Initial date
    #[props(default)]
    pub value: Option<NaiveDate>,
    #[props(default)]
    pub errors: Vec<String>,
    #[props(default)]
    pub note: Option<String>,
    #[props(default = false)]
    pub required: bool,
}

#[component]
pub fn BirthdayInput(props: BirthdayInputProps) -> Element {
    let mut text = use_signal(|| BirthdayText::from_date(props.value));
    let on_change = props.on_change;
    let marker = dashify(&props.label);
    let has_errors = !props.errors.is_empty();

    rsx! {
        LabelledField {
            label: props.label.clone(),
            note: props.note.clone(),
            required: props.required,
            errors: props.errors.clone(),
            div { class: "birthday-input {marker}",
                for part in [DatePart::Month, DatePart::Day, DatePart::Year] {
                    {
                        let key = part.aria_label();
                        let value = text.read().get(part).to_string();
                        rsx! {
                            input {
                                key: "{key}",
                                class: part.class(),
                                r#type: "number",
                                "inputmode": "numeric",
                                placeholder: part.placeholder(),
                                value: "{value}",
                                "aria-label": part.aria_label(),
                                "aria-invalid": "{has_errors}",
                                "aria-required": "{props.required}",
                                oninput: move |event: FormEvent| {
                                    text.write().set(part, event.value());
                                    on_change.call(text.read().value());
                                },
                            }
                        }
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
    fn complete_text_composes_a_date() {
        let mut text = BirthdayText::default();
        text.set(DatePart::Month, "12".to_string());
        text.set(DatePart::Day, "10".to_string());
        assert_eq!(text.value(), FieldValue::Empty);

        text.set(DatePart::Year, "1990".to_string());
        assert_eq!(text.value().as_date(), NaiveDate::from_ymd_opt(1990, 12, 10));
    }

    #[test]
    fn partial_or_garbage_text_is_empty() {
        let mut text = BirthdayText::from_date(NaiveDate::from_ymd_opt(1990, 12, 10));
        text.set(DatePart::Day, "abc".to_string());
        assert_eq!(text.value(), FieldValue::Empty);
        assert_eq!(text.get(DatePart::Day), "abc");
    }

    #[test]
    fn from_date_fills_boxes() {
        let text = BirthdayText::from_date(NaiveDate::from_ymd_opt(1984, 3, 7));
        assert_eq!(text.get(DatePart::Month), "3");
        assert_eq!(text.get(DatePart::Day), "7");
        assert_eq!(text.get(DatePart::Year), "1984");
        assert_eq!(BirthdayText::from_date(None), BirthdayText::default());
    }
}
