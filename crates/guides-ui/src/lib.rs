//! Guides UI Components
//!
//! Presentational Dioxus primitives for the Guides section: buttons,
//! labeled inputs, cards, a modal dialog and named icons.
//!
//! These components carry no domain logic. They render their props and
//! emit interaction callbacks; the section wires them to state.

pub mod components;

pub use components::*;
