//! Scripted [`VoterApi`] for tests.
//!
//! Responses are queued per operation and handed out in order; every call is
//! recorded with the record or email it was made with.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::VoterApi;
use crate::error::ApiError;
use crate::voter::VoterRecord;

/// A call observed by [`ScriptedApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CheckRegistration(VoterRecord),
    SignUp(VoterRecord),
    SendLoginEmail(String),
}

/// In-memory API answering from queued responses
#[derive(Debug, Default)]
pub struct ScriptedApi {
    checks: Mutex<VecDeque<Result<bool, ApiError>>>,
    sign_ups: Mutex<VecDeque<Result<(), ApiError>>>,
    logins: Mutex<VecDeque<Result<(), ApiError>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next `check_registration` outcome
    pub fn with_check(self, outcome: Result<bool, ApiError>) -> Self {
        self.checks.lock().push_back(outcome);
        self
    }

    /// Queue the next `sign_up` outcome
    pub fn with_sign_up(self, outcome: Result<(), ApiError>) -> Self {
        self.sign_ups.lock().push_back(outcome);
        self
    }

    /// Queue the next `send_login_email` outcome
    pub fn with_login(self, outcome: Result<(), ApiError>) -> Self {
        self.logins.lock().push_back(outcome);
        self
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, operation: &str) -> Result<T, ApiError> {
    queue
        .lock()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Transport(format!("no scripted {operation} response"))))
}

#[async_trait]
impl VoterApi for ScriptedApi {
    async fn check_registration(&self, voter: &VoterRecord) -> Result<bool, ApiError> {
        self.calls.lock().push(ApiCall::CheckRegistration(voter.clone()));
        next(&self.checks, "check_registration")
    }

    async fn sign_up(&self, voter: &VoterRecord) -> Result<(), ApiError> {
        self.calls.lock().push(ApiCall::SignUp(voter.clone()));
        next(&self.sign_ups, "sign_up")
    }

    async fn send_login_email(&self, email: &str) -> Result<(), ApiError> {
        self.calls.lock().push(ApiCall::SendLoginEmail(email.to_string()));
        next(&self.logins, "send_login_email")
    }
}
