//! votecheck Core Library
//!
//! Framework-free pieces of the voter registration client.
//!
//! ## Overview
//!
//! The desktop client walks a voter through two short forms: a registration
//! check (name, birth date, zip code) and, when the voter is registered, an
//! optional reminder sign-up. Everything that can be expressed without a UI
//! framework lives here:
//!
//! - **Voter session**: the current [`VoterRecord`] plus the [`VoterApi`] it is
//!   checked against, shared through a cloneable [`Session`]
//! - **Form flows**: [`CheckFlow`], [`SignUpFlow`] and [`LoginFlow`] are plain
//!   state machines that decide what a page shows and where it navigates
//! - **Input contract**: [`FieldValue`], numeric coercion and the label marker
//!   transform shared by every input component
//! - **HTTP adapter**: [`HttpVoterApi`] talks to the voter REST API with reqwest
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use votecheck_core::{ApiConfig, CheckFlow, HttpVoterApi, Session};
//!
//! let config = ApiConfig::new("http://localhost:8000/api/", Duration::from_secs(10))?;
//! let session = Session::new(Arc::new(HttpVoterApi::new(&config)?));
//!
//! let mut flow = CheckFlow::new();
//! if let Some(identity) = flow.begin_submit() {
//!     session.update(|voter| voter.apply_identity(identity));
//!     let destination = flow.settle(session.check_registration().await);
//! }
//! ```

pub mod api;
pub mod config;
pub mod destination;
pub mod error;
pub mod flow;
pub mod form;
pub mod input;
pub mod session;
pub mod voter;

// Re-exports
pub use api::{HttpVoterApi, VoterApi};
pub use config::ApiConfig;
pub use destination::Destination;
pub use error::{ApiError, ConfigError};
pub use flow::{CheckFlow, FieldUpdate, LoginFlow, SignUpFlow, SignUpPhase, SubmitPhase};
pub use form::{FieldName, FormErrors};
pub use input::{coerce_input, dashify, parse_int, DateParts, FieldValue, NUMBER_INPUT};
pub use session::Session;
pub use voter::{Identity, VoterRecord};

#[cfg(any(test, feature = "test-support"))]
pub use api::fake::{ApiCall, ScriptedApi};
