//! Reusable UI components
//!
//! Class names follow the `GLOBAL_STYLES` sheet shipped by the desktop shell.

mod button;
mod card;
mod dialog;
mod icon;
mod input;

pub use button::*;
pub use card::*;
pub use dialog::*;
pub use icon::*;
pub use input::*;
