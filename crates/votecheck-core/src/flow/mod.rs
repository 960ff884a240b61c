//! Page flows as plain state machines.
//!
//! Each flow owns the transient form state of one page and decides what the
//! page shows and where it navigates. Pages drive them in three steps:
//!
//! 1. feed change events in (`apply`, `set_email`)
//! 2. `begin_submit` returns the values to write onto the voter record, or
//!    `None` while a request is still outstanding
//! 3. `settle` consumes the remote outcome and may return a [`Destination`]
//!
//! Nothing here renders or awaits, so the transitions are tested directly.

mod check;
mod login;
mod verified;

pub use check::{CheckFlow, FieldUpdate};
pub use login::LoginFlow;
pub use verified::{SignUpFlow, SignUpPhase};

use crate::destination::Destination;
use crate::error::ApiError;
use crate::form::{FieldName, FormErrors};

/// Phase of a form whose rejections carry field errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Fields are editable, nothing shown
    #[default]
    Editing,
    /// One request is outstanding
    Submitting,
    /// Editable again, with the last rejection's field errors visible
    ErrorShown,
    /// Finished; the page navigates away
    Done(Destination),
}

impl SubmitPhase {
    /// Whether a new submit may start
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmitPhase::Editing | SubmitPhase::ErrorShown)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Phase and errors a form returns to after a failed request.
///
/// Validation rejections replace the errors wholesale; messages under keys
/// outside `shown` are logged since the page has nowhere to put them.
/// Anything else is logged and leaves the form editable with no field errors.
fn rejected(
    flow: &'static str,
    shown: &[FieldName],
    error: ApiError,
) -> (SubmitPhase, FormErrors) {
    match error {
        ApiError::Validation(errors) => {
            tracing::debug!(flow, fields = errors.len(), "Submission rejected");
            let unshown = errors.unshown_keys(shown);
            if !unshown.is_empty() {
                tracing::warn!(flow, keys = ?unshown, "Rejection has errors no field displays");
            }
            (SubmitPhase::ErrorShown, errors)
        }
        other => {
            tracing::error!(flow, error = %other, "Submission failed");
            (SubmitPhase::Editing, FormErrors::new())
        }
    }
}
