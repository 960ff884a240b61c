//! Voter session shared by all pages.
//!
//! A [`Session`] pairs the current [`VoterRecord`] with the [`VoterApi`] it is
//! checked against. It is cheap to clone; every clone sees the same record.
//!
//! ## Usage
//!
//! ```ignore
//! session.update(|voter| voter.email = email);
//! session.sign_up().await?;
//! assert!(session.signed_up());
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::VoterApi;
use crate::error::ApiError;
use crate::voter::VoterRecord;

/// The current voter and the API used on their behalf
#[derive(Clone)]
pub struct Session {
    voter: Arc<RwLock<VoterRecord>>,
    api: Arc<dyn VoterApi>,
}

impl Session {
    /// Start a session with an empty voter record
    pub fn new(api: Arc<dyn VoterApi>) -> Self {
        Self::with_voter(api, VoterRecord::default())
    }

    pub fn with_voter(api: Arc<dyn VoterApi>, voter: VoterRecord) -> Self {
        Self {
            voter: Arc::new(RwLock::new(voter)),
            api,
        }
    }

    /// Snapshot of the current record
    pub fn voter(&self) -> VoterRecord {
        self.voter.read().clone()
    }

    /// Mutate the record in place
    pub fn update<R>(&self, f: impl FnOnce(&mut VoterRecord) -> R) -> R {
        f(&mut self.voter.write())
    }

    pub fn signed_up(&self) -> bool {
        self.voter.read().signed_up
    }

    /// Check whether the record's identity is registered to vote
    pub async fn check_registration(&self) -> Result<bool, ApiError> {
        let voter = self.voter();
        tracing::debug!(zip_code = %voter.zip_code, "Checking registration");
        self.api.check_registration(&voter).await
    }

    /// Sign the voter up for reminders; marks the record signed up on success
    pub async fn sign_up(&self) -> Result<(), ApiError> {
        let voter = self.voter();
        tracing::debug!("Signing up voter for reminders");
        self.api.sign_up(&voter).await?;
        self.voter.write().signed_up = true;
        Ok(())
    }

    /// Ask the API to email a login link to the record's email address
    pub async fn send_login_email(&self) -> Result<(), ApiError> {
        let email = self.voter.read().email.clone();
        tracing::debug!("Requesting login email");
        self.api.send_login_email(&email).await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("voter", &*self.voter.read())
            .finish_non_exhaustive()
    }
}
