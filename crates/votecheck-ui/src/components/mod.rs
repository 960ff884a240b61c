//! Reusable form components
//!
//! All components take their look from the [`THEME`](crate::THEME) tokens via
//! the global stylesheet; they only assign class names.

mod birthday;
mod button;
mod labelled;
mod short_input;
mod wrapper;

pub use birthday::*;
pub use button::*;
pub use labelled::*;
pub use short_input::*;
pub use wrapper::*;
