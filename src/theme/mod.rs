//! Visual theme for the Guides desktop shell.

mod styles;

pub use styles::GLOBAL_STYLES;
