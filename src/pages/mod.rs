//! Page components for Guides.

mod guides;

pub use guides::Guides;
