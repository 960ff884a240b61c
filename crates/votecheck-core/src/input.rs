//! Input contract shared by the form components
//!
//! - [`FieldValue`]: the transient value of one form field
//! - [`coerce_input`]: turns raw control text into a [`FieldValue`]
//! - [`dashify`]: the stable marker derived from a field label
//! - [`DateParts`]: month/day/year pieces of the birthday input

use chrono::{Datelike, NaiveDate};

/// Input type that switches a text input into numeric coercion
pub const NUMBER_INPUT: &str = "number";

/// Smallest year the birthday input accepts as complete
const MIN_FULL_YEAR: i32 = 1000;

/// Value held by a single form field
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    /// Integer-valued, or NaN when the text did not start with a number
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue {
    /// Text form of the value, as a controlled input displays it
    pub fn text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) if n.is_nan() => String::new(),
            FieldValue::Number(n) => format!("{n}"),
            FieldValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            other => other.text(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

/// Coerce raw control text according to the input type.
///
/// `"number"` inputs go through [`parse_int`]; a failed parse is passed on as
/// `Number(NaN)` and left for the caller to validate. Any other type passes
/// the text through unchanged.
pub fn coerce_input(input_type: &str, raw: &str) -> FieldValue {
    if input_type == NUMBER_INPUT {
        FieldValue::Number(parse_int(raw))
    } else {
        FieldValue::Text(raw.to_string())
    }
}

/// Parse the integer prefix of `raw`.
///
/// Leading whitespace and one sign are skipped, then the longest run of
/// decimal digits is read (`0x`/`0X` switches to hex digits). Text after the
/// digits is ignored, so `"12px"` is 12 and `"3.9"` is 3. Returns NaN when no
/// digit is found.
pub fn parse_int(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
    }

    match value {
        Some(v) if negative => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}

/// Lowercase, hyphen-separated marker for a label.
///
/// camelCase boundaries become hyphens and every character other than ASCII
/// alphanumerics, `_` and Latin letters (U+00C0..=U+017E) becomes one hyphen.
/// Runs are kept as they are; only leading and trailing hyphens are dropped:
/// `"First Name"` becomes `first-name`, `"Last   Name"` becomes `last---name`.
pub fn dashify(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_lower = false;

    for c in label.trim().chars() {
        if is_word_char(c) {
            if c.is_ascii_uppercase() && prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            // one hyphen per UTF-16 unit, as browsers count them
            out.extend(std::iter::repeat('-').take(c.len_utf16()));
        }
        prev_lower = c.is_ascii_lowercase();
    }

    out.trim_matches('-').to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{C0}'..='\u{17E}').contains(&c)
}

/// Month, day and year entered separately in the birthday input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub year: Option<i32>,
}

impl DateParts {
    /// Split an existing date, or start empty
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self {
                month: Some(date.month()),
                day: Some(date.day()),
                year: Some(date.year()),
            },
            None => Self::default(),
        }
    }

    pub fn set_month(&mut self, value: f64) {
        self.month = whole_in_range(value, 1, 12).map(|m| m as u32);
    }

    pub fn set_day(&mut self, value: f64) {
        self.day = whole_in_range(value, 1, 31).map(|d| d as u32);
    }

    pub fn set_year(&mut self, value: f64) {
        self.year = whole_in_range(value, 0, 9999).map(|y| y as i32);
    }

    /// The composed date, if all parts are present and form a real date
    pub fn to_date(&self) -> Option<NaiveDate> {
        let year = self.year.filter(|y| *y >= MIN_FULL_YEAR)?;
        NaiveDate::from_ymd_opt(year, self.month?, self.day?)
    }

    /// `Date` when complete, otherwise `Empty`
    pub fn to_value(&self) -> FieldValue {
        self.to_date().map_or(FieldValue::Empty, FieldValue::Date)
    }
}

fn whole_in_range(value: f64, min: i64, max: i64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let whole = value.trunc() as i64;
    (min..=max).contains(&whole).then_some(whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_parses_integers() {
        assert_eq!(coerce_input("number", "42"), FieldValue::Number(42.0));
        assert_eq!(coerce_input("number", "  -7"), FieldValue::Number(-7.0));
        assert_eq!(coerce_input("number", "12px"), FieldValue::Number(12.0));
        assert_eq!(coerce_input("number", "3.9"), FieldValue::Number(3.0));
        assert_eq!(coerce_input("number", "0x1F"), FieldValue::Number(31.0));
    }

    #[test]
    fn number_input_passes_nan_through() {
        for raw in ["abc", "", "   ", "-", "+x", "0x"] {
            let value = coerce_input("number", raw);
            let n = value.as_number().unwrap();
            assert!(n.is_nan(), "{raw:?} should coerce to NaN, got {n}");
        }
    }

    #[test]
    fn other_input_types_pass_text_unchanged() {
        for input_type in ["text", "email", "", "Number"] {
            assert_eq!(
                coerce_input(input_type, " 42 "),
                FieldValue::Text(" 42 ".to_string())
            );
        }
    }

    #[test]
    fn dashify_examples() {
        assert_eq!(dashify("First Name"), "first-name");
        assert_eq!(dashify("Zip Code"), "zip-code");
        assert_eq!(dashify("Email"), "email");
        assert_eq!(dashify("birthDate"), "birth-date");
        assert_eq!(dashify("  Last   Name!! "), "last---name");
        assert_eq!(dashify("Last   Name"), "last---name");
        assert_eq!(dashify("Zip - Code"), "zip---code");
        assert_eq!(dashify("(Optional) Note"), "optional--note");
        assert_eq!(dashify("zip_code"), "zip_code");
        assert_eq!(dashify("Année"), "année");
        assert_eq!(dashify("--"), "");
    }

    #[test]
    fn field_value_text() {
        assert_eq!(FieldValue::Empty.text(), "");
        assert_eq!(FieldValue::Number(42.0).text(), "42");
        assert_eq!(FieldValue::Number(f64::NAN).text(), "");
        let date = NaiveDate::from_ymd_opt(1990, 2, 3).unwrap();
        assert_eq!(FieldValue::Date(date).text(), "1990-02-03");
        assert_eq!(FieldValue::Text("48104".into()).into_text(), "48104");
    }

    #[test]
    fn date_parts_compose_only_real_dates() {
        let mut parts = DateParts::default();
        parts.set_month(2.0);
        parts.set_day(29.0);
        parts.set_year(1991.0);
        assert_eq!(parts.to_date(), None);

        parts.set_year(1992.0);
        assert_eq!(parts.to_date(), NaiveDate::from_ymd_opt(1992, 2, 29));
    }

    #[test]
    fn date_parts_wait_for_full_year() {
        let mut parts = DateParts::from_date(NaiveDate::from_ymd_opt(1980, 5, 17));
        parts.set_year(19.0);
        assert_eq!(parts.to_value(), FieldValue::Empty);
        parts.set_year(1981.0);
        assert_eq!(parts.to_value().as_date(), NaiveDate::from_ymd_opt(1981, 5, 17));
    }

    #[test]
    fn date_parts_drop_invalid_pieces() {
        let mut parts = DateParts::from_date(NaiveDate::from_ymd_opt(1980, 5, 17));
        parts.set_month(f64::NAN);
        assert_eq!(parts.month, None);
        parts.set_day(32.0);
        assert_eq!(parts.day, None);
        assert_eq!(parts.to_date(), None);
    }
}
