//! Design tokens and the global stylesheet built from them.

mod styles;
mod tokens;

pub use styles::global_styles;
pub use tokens::*;
