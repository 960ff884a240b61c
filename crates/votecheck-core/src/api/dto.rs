//! Wire shapes of the voter REST API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::voter::VoterRecord;

/// Query string of `GET registrations/`
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct RegistrationQuery<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub zip_code: &'a str,
}

impl<'a> From<&'a VoterRecord> for RegistrationQuery<'a> {
    fn from(voter: &'a VoterRecord) -> Self {
        Self {
            first_name: &voter.first_name,
            last_name: &voter.last_name,
            birth_date: voter.birth_date,
            zip_code: &voter.zip_code,
        }
    }
}

/// Body of a successful `GET registrations/`
#[derive(Debug, Deserialize)]
pub(crate) struct RegistrationStatusDto {
    pub registered: bool,
}

/// Body of `POST voters/`
#[derive(Debug, Serialize)]
pub(crate) struct SignUpRequest<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub zip_code: &'a str,
}

impl<'a> From<&'a VoterRecord> for SignUpRequest<'a> {
    fn from(voter: &'a VoterRecord) -> Self {
        Self {
            email: &voter.email,
            first_name: &voter.first_name,
            last_name: &voter.last_name,
            birth_date: voter.birth_date,
            zip_code: &voter.zip_code,
        }
    }
}

/// Body of `POST login/`
#[derive(Debug, Serialize)]
pub(crate) struct LoginEmailRequest<'a> {
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter() -> VoterRecord {
        VoterRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 10),
            zip_code: "48104".to_string(),
            email: "ada@example.org".to_string(),
            signed_up: false,
        }
    }

    #[test]
    fn sign_up_body_uses_api_keys_and_iso_dates() {
        let voter = voter();
        let body = serde_json::to_value(SignUpRequest::from(&voter)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "email": "ada@example.org",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "birth_date": "1990-12-10",
                "zip_code": "48104",
            })
        );
    }

    #[test]
    fn missing_birth_date_is_omitted() {
        let voter = VoterRecord {
            birth_date: None,
            ..voter()
        };
        let body = serde_json::to_value(RegistrationQuery::from(&voter)).unwrap();
        assert!(body.get("birth_date").is_none());
        assert_eq!(body["zip_code"], "48104");
    }

    #[test]
    fn status_body_decodes() {
        let status: RegistrationStatusDto =
            serde_json::from_str(r#"{"registered": true, "id": 7}"#).unwrap();
        assert!(status.registered);
    }
}
