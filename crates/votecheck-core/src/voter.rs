//! The voter acting in the current session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration data of the current user.
///
/// Pages write their collected fields here before invoking a remote
/// operation; the API always sees the record as it stands at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub zip_code: String,
    pub email: String,
    /// Whether the voter already opted into election reminders
    pub signed_up: bool,
}

impl VoterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the identifying fields collected by the registration check
    pub fn apply_identity(&mut self, identity: Identity) {
        self.first_name = identity.first_name;
        self.last_name = identity.last_name;
        self.birth_date = identity.birth_date;
        self.zip_code = identity.zip_code;
    }

    /// The identifying fields of this record
    pub fn identity(&self) -> Identity {
        Identity {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
            zip_code: self.zip_code.clone(),
        }
    }
}

/// The fields a registration check is performed against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub zip_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_identity_keeps_email_and_sign_up() {
        let mut voter = VoterRecord {
            email: "ada@example.org".to_string(),
            signed_up: true,
            ..VoterRecord::default()
        };
        let identity = Identity {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 10),
            zip_code: "48104".to_string(),
        };

        voter.apply_identity(identity.clone());

        assert_eq!(voter.identity(), identity);
        assert_eq!(voter.email, "ada@example.org");
        assert!(voter.signed_up);
    }
}
