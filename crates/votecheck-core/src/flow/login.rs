//! Login: request an emailed login link for an existing voter.

use super::{rejected, SubmitPhase};
use crate::destination::Destination;
use crate::error::ApiError;
use crate::form::{FieldName, FormErrors};

const UNKNOWN_EMAIL: &str = "No voter is signed up with this email.";

/// Form state of the login page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFlow {
    email: String,
    errors: FormErrors,
    phase: SubmitPhase,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn email_errors(&self) -> &[String] {
        self.errors.for_field(FieldName::Email)
    }

    pub fn can_submit(&self) -> bool {
        self.phase.accepts_submit()
    }

    /// Start a request; `None` while one is outstanding
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.errors.clear();
        self.phase = SubmitPhase::Submitting;
        Some(self.email.clone())
    }

    /// Consume the outcome. An unknown email (404) is shown as an email
    /// error; other non-validation failures are only logged.
    pub fn settle(&mut self, outcome: Result<(), ApiError>) -> Option<Destination> {
        if !self.phase.is_submitting() {
            tracing::warn!(phase = ?self.phase, "Ignoring login outcome");
            return None;
        }

        match outcome {
            Ok(()) => {
                self.phase = SubmitPhase::Done(Destination::AwaitingConfirmation);
                Some(Destination::AwaitingConfirmation)
            }
            Err(ApiError::Status { status: 404, .. }) => {
                self.errors = FormErrors::new().with(FieldName::Email, UNKNOWN_EMAIL);
                self.phase = SubmitPhase::ErrorShown;
                None
            }
            Err(error) => {
                (self.phase, self.errors) = rejected("login", &[FieldName::Email], error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_email_awaits_confirmation() {
        let mut flow = LoginFlow::new();
        flow.set_email("ada@example.org".to_string());
        assert_eq!(flow.begin_submit().as_deref(), Some("ada@example.org"));
        assert_eq!(flow.settle(Ok(())), Some(Destination::AwaitingConfirmation));
    }

    #[test]
    fn unknown_email_is_a_field_error() {
        let mut flow = LoginFlow::new();
        flow.begin_submit();
        let outcome = Err(ApiError::Status {
            status: 404,
            message: "status 404".to_string(),
        });

        assert_eq!(flow.settle(outcome), None);
        assert_eq!(flow.email_errors(), [UNKNOWN_EMAIL]);
        assert!(flow.can_submit());
    }

    #[test]
    fn validation_errors_replace_previous_ones() {
        let mut flow = LoginFlow::new();
        flow.begin_submit();
        flow.settle(Err(ApiError::Validation(
            FormErrors::new().with(FieldName::Email, "Enter a valid email address."),
        )));
        assert_eq!(flow.email_errors().len(), 1);

        flow.begin_submit();
        assert!(flow.email_errors().is_empty());
        flow.settle(Err(ApiError::Timeout("slow".into())));
        assert!(flow.email_errors().is_empty());
        assert_eq!(flow.phase(), SubmitPhase::Editing);
    }
}
