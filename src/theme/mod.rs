//! Visual theme for the droplink page.

mod styles;

pub use styles::GLOBAL_STYLES;
