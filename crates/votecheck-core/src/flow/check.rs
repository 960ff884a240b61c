//! Registration check: name, birth date and zip code against the voter rolls.

use chrono::NaiveDate;

use super::{rejected, SubmitPhase};
use crate::destination::Destination;
use crate::error::ApiError;
use crate::form::{FieldName, FormErrors};
use crate::voter::Identity;

/// A change to exactly one registration check field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    BirthDate(Option<NaiveDate>),
    ZipCode(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::FirstName(_) => FieldName::FirstName,
            FieldUpdate::LastName(_) => FieldName::LastName,
            FieldUpdate::BirthDate(_) => FieldName::BirthDate,
            FieldUpdate::ZipCode(_) => FieldName::ZipCode,
        }
    }
}

/// Fields the registration check page displays errors under
const CHECK_FIELDS: [FieldName; 4] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::BirthDate,
    FieldName::ZipCode,
];

/// Form state of the registration check page.
///
/// Fields are not validated locally; empty values are submitted and the
/// API's rejection decides what is wrong.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckFlow {
    identity: Identity,
    errors: FormErrors,
    phase: SubmitPhase,
}

impl CheckFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field change
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(value) => self.identity.first_name = value,
            FieldUpdate::LastName(value) => self.identity.last_name = value,
            FieldUpdate::BirthDate(value) => self.identity.birth_date = value,
            FieldUpdate::ZipCode(value) => self.identity.zip_code = value,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.identity.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.identity.last_name
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.identity.birth_date
    }

    pub fn zip_code(&self) -> &str {
        &self.identity.zip_code
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Errors to list under one field
    pub fn errors_for(&self, field: FieldName) -> &[String] {
        self.errors.for_field(field)
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.phase.accepts_submit()
    }

    /// Start a submit: clears shown errors and hands back the identity to
    /// write onto the voter record. `None` while a check is outstanding.
    pub fn begin_submit(&mut self) -> Option<Identity> {
        if !self.can_submit() {
            tracing::debug!("Registration check already in flight");
            return None;
        }
        self.errors.clear();
        self.phase = SubmitPhase::Submitting;
        Some(self.identity.clone())
    }

    /// Consume the check outcome.
    ///
    /// Returns where to navigate: verified when registered, not-registered
    /// otherwise. A rejection returns `None` and leaves the form editable.
    pub fn settle(&mut self, outcome: Result<bool, ApiError>) -> Option<Destination> {
        if !self.phase.is_submitting() {
            tracing::warn!(phase = ?self.phase, "Ignoring registration check outcome");
            return None;
        }

        match outcome {
            Ok(registered) => {
                let destination = if registered {
                    Destination::RegistrationVerified
                } else {
                    Destination::NotRegistered
                };
                tracing::info!(registered, "Registration check complete");
                self.phase = SubmitPhase::Done(destination);
                Some(destination)
            }
            Err(error) => {
                (self.phase, self.errors) = rejected("registration_check", &CHECK_FIELDS, error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CheckFlow {
        let mut flow = CheckFlow::new();
        flow.apply(FieldUpdate::FirstName("Ada".to_string()));
        flow.apply(FieldUpdate::LastName("Lovelace".to_string()));
        flow.apply(FieldUpdate::BirthDate(NaiveDate::from_ymd_opt(1990, 12, 10)));
        flow.apply(FieldUpdate::ZipCode("48104".to_string()));
        flow
    }

    #[test]
    fn updates_touch_only_their_field() {
        let mut flow = filled();
        flow.apply(FieldUpdate::ZipCode("49503".to_string()));

        assert_eq!(flow.zip_code(), "49503");
        assert_eq!(flow.first_name(), "Ada");
        assert_eq!(flow.last_name(), "Lovelace");
        assert_eq!(flow.birth_date(), NaiveDate::from_ymd_opt(1990, 12, 10));
        assert_eq!(FieldUpdate::ZipCode(String::new()).field(), FieldName::ZipCode);
    }

    #[test]
    fn registered_goes_to_verified() {
        let mut flow = filled();
        let identity = flow.begin_submit().unwrap();
        assert_eq!(identity.zip_code, "48104");
        assert!(flow.phase().is_submitting());

        assert_eq!(flow.settle(Ok(true)), Some(Destination::RegistrationVerified));
        assert_eq!(flow.phase(), SubmitPhase::Done(Destination::RegistrationVerified));
    }

    #[test]
    fn unregistered_goes_to_not_registered() {
        let mut flow = filled();
        flow.begin_submit();
        assert_eq!(flow.settle(Ok(false)), Some(Destination::NotRegistered));
        assert!(!flow.can_submit());
    }

    #[test]
    fn rejection_shows_field_errors() {
        let mut flow = filled();
        flow.begin_submit();
        let errors = FormErrors::new().with(FieldName::ZipCode, "invalid");

        assert_eq!(flow.settle(Err(ApiError::Validation(errors))), None);
        assert_eq!(flow.phase(), SubmitPhase::ErrorShown);
        assert_eq!(flow.errors_for(FieldName::ZipCode), ["invalid"]);
        assert!(flow.errors_for(FieldName::FirstName).is_empty());
        assert!(flow.errors_for(FieldName::LastName).is_empty());
        assert!(flow.errors_for(FieldName::BirthDate).is_empty());
        assert!(flow.can_submit());
    }

    #[test]
    fn rejection_without_page_fields_keeps_errors_for_logging() {
        let mut flow = filled();
        flow.begin_submit();
        let errors: FormErrors =
            serde_json::from_str(r#"{"non_field_errors": ["Unable to verify."]}"#).unwrap();

        assert_eq!(flow.settle(Err(ApiError::Validation(errors))), None);
        assert_eq!(flow.phase(), SubmitPhase::ErrorShown);
        assert_eq!(flow.errors().unshown_keys(&CHECK_FIELDS), ["non_field_errors"]);
        for field in CHECK_FIELDS {
            assert!(flow.errors_for(field).is_empty());
        }
        assert!(flow.can_submit());
    }

    #[test]
    fn resubmit_clears_previous_errors() {
        let mut flow = filled();
        flow.begin_submit();
        flow.settle(Err(ApiError::Validation(
            FormErrors::new().with(FieldName::FirstName, "required"),
        )));

        flow.begin_submit().unwrap();
        assert!(flow.errors().is_empty());

        flow.settle(Err(ApiError::Validation(
            FormErrors::new().with(FieldName::LastName, "required"),
        )));
        assert!(flow.errors_for(FieldName::FirstName).is_empty());
        assert_eq!(flow.errors_for(FieldName::LastName).len(), 1);
    }

    #[test]
    fn transport_failure_returns_to_editing_without_errors() {
        let mut flow = filled();
        flow.begin_submit();
        assert_eq!(flow.settle(Err(ApiError::Transport("refused".into()))), None);
        assert_eq!(flow.phase(), SubmitPhase::Editing);
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn no_second_submit_while_in_flight() {
        let mut flow = filled();
        assert!(flow.begin_submit().is_some());
        assert!(!flow.can_submit());
        assert!(flow.begin_submit().is_none());
    }

    #[test]
    fn empty_fields_are_submitted_as_is() {
        let mut flow = CheckFlow::new();
        let identity = flow.begin_submit().unwrap();
        assert_eq!(identity, Identity::default());
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut flow = filled();
        assert_eq!(flow.settle(Ok(true)), None);
        assert_eq!(flow.phase(), SubmitPhase::Editing);
    }
}
