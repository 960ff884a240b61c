//! votecheck UI Components
//!
//! Dioxus form components for the voter registration client, plus the design
//! token table every component is styled from.
//!
//! ## Design Philosophy
//!
//! Calm, civic and legible:
//! - **Slate (#475B6E)**: page chrome and headings
//! - **Orange (#FF803A)**: the one primary action on a page
//! - **Red (#F8342D)**: validation errors, never decoration
//! - **Green (#B2FF55)**: confirmed registration
//!
//! Components carry no page logic. They render what they are given and report
//! changes through callbacks as [`FieldValue`](votecheck_core::FieldValue)s.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{global_styles, THEME};
