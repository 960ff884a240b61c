//! Voter API seam.
//!
//! Pages never talk HTTP directly; they go through [`VoterApi`] via the
//! [`Session`](crate::Session). [`HttpVoterApi`] is the production adapter.

mod dto;
#[cfg(any(test, feature = "test-support"))]
pub mod fake;
mod http;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::voter::VoterRecord;

pub use http::HttpVoterApi;

/// Remote operations available to the client
#[async_trait]
pub trait VoterApi: Send + Sync {
    /// Whether the voter's identity matches a registration.
    ///
    /// Rejects with [`ApiError::Validation`] when the identity fields are
    /// unacceptable.
    async fn check_registration(&self, voter: &VoterRecord) -> Result<bool, ApiError>;

    /// Create the voter's account so they receive election reminders
    async fn sign_up(&self, voter: &VoterRecord) -> Result<(), ApiError>;

    /// Email a login link to an existing voter
    async fn send_login_email(&self, email: &str) -> Result<(), ApiError>;
}
