//! Session context for votecheck pages.
//!
//! `main` launches the app with a [`Session`] as root context; pages read it
//! with [`use_session`] instead of reaching for a global.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! session.update(|voter| voter.email = email);
//! ```

use dioxus::prelude::*;
use votecheck_core::Session;

/// Hook to access the voter session from context.
pub fn use_session() -> Session {
    use_context::<Session>()
}
