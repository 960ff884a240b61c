//! Registration verified: optional email sign-up for election reminders.

use crate::destination::Destination;
use crate::error::ApiError;

/// What the verified page is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpPhase {
    /// The voter already opted in; only a confirmation is shown
    AlreadySignedUp,
    EmailEntry,
    Submitting,
    /// Sign-up accepted; the page navigates away
    SignedUp,
}

/// Form state of the registration verified page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpFlow {
    email: String,
    phase: SignUpPhase,
}

impl SignUpFlow {
    /// Start from the voter's current opt-in state
    pub fn new(signed_up: bool) -> Self {
        let phase = if signed_up {
            SignUpPhase::AlreadySignedUp
        } else {
            SignUpPhase::EmailEntry
        };
        Self {
            email: String::new(),
            phase,
        }
    }

    pub fn phase(&self) -> SignUpPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Whether the email sub-form is rendered at all
    pub fn shows_sign_up_form(&self) -> bool {
        matches!(self.phase, SignUpPhase::EmailEntry | SignUpPhase::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SignUpPhase::EmailEntry
    }

    /// Start a sign-up and hand back the email to write onto the voter
    /// record. `None` when the form is hidden or a sign-up is in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!(phase = ?self.phase, "Sign-up not accepted in this phase");
            return None;
        }
        self.phase = SignUpPhase::Submitting;
        Some(self.email.clone())
    }

    /// Consume the sign-up outcome.
    ///
    /// Success navigates to the awaiting-confirmation page. A failure is only
    /// logged; the form becomes usable again with nothing else shown.
    pub fn settle(&mut self, outcome: Result<(), ApiError>) -> Option<Destination> {
        if self.phase != SignUpPhase::Submitting {
            tracing::warn!(phase = ?self.phase, "Ignoring sign-up outcome");
            return None;
        }

        match outcome {
            Ok(()) => {
                self.phase = SignUpPhase::SignedUp;
                Some(Destination::AwaitingConfirmation)
            }
            Err(error) => {
                tracing::error!(error = %error, "Sign-up failed");
                self.phase = SignUpPhase::EmailEntry;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldName, FormErrors};

    #[test]
    fn signed_up_voter_sees_no_form() {
        let mut flow = SignUpFlow::new(true);
        assert_eq!(flow.phase(), SignUpPhase::AlreadySignedUp);
        assert!(!flow.shows_sign_up_form());
        assert!(flow.begin_submit().is_none());
    }

    #[test]
    fn successful_sign_up_awaits_confirmation() {
        let mut flow = SignUpFlow::new(false);
        assert!(flow.shows_sign_up_form());

        flow.set_email("ada@example.org".to_string());
        assert_eq!(flow.begin_submit().as_deref(), Some("ada@example.org"));
        assert!(flow.shows_sign_up_form());
        assert!(!flow.can_submit());

        assert_eq!(flow.settle(Ok(())), Some(Destination::AwaitingConfirmation));
        assert_eq!(flow.phase(), SignUpPhase::SignedUp);
        assert!(!flow.shows_sign_up_form());
    }

    #[test]
    fn failed_sign_up_reopens_form() {
        let mut flow = SignUpFlow::new(false);
        flow.set_email("not-an-email".to_string());
        flow.begin_submit();

        let rejection = ApiError::Validation(FormErrors::new().with(FieldName::Email, "invalid"));
        assert_eq!(flow.settle(Err(rejection)), None);
        assert_eq!(flow.phase(), SignUpPhase::EmailEntry);
        assert_eq!(flow.email(), "not-an-email");
    }

    #[test]
    fn in_flight_sign_up_blocks_resubmit() {
        let mut flow = SignUpFlow::new(false);
        assert!(flow.begin_submit().is_some());
        assert!(flow.begin_submit().is_none());
    }
}
