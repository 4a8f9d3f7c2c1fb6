//! Guides Core Library
//!
//! State behind the "Guides" page section: an in-memory list of guides,
//! the draft form that feeds it, and the reveal-on-scroll flag that drives
//! the section's entrance transition.
//!
//! ## Overview
//!
//! Nothing here renders or persists. The UI shell owns one [`GuideList`],
//! one [`DraftForm`] and one [`VisibilityTracker`] and calls into them from
//! its event handlers.
//!
//! ## Quick Start
//!
//! ```
//! use guides_core::{DraftForm, GuideField, GuideList};
//!
//! let mut list = GuideList::seeded();
//! let mut form = DraftForm::new();
//!
//! form.open();
//! form.set_field(GuideField::Title, "T");
//! form.set_field(GuideField::Description, "D");
//! form.set_field(GuideField::Content, "C");
//! form.set_field(GuideField::Author, "A");
//!
//! let guide = form.submit(&mut list).unwrap();
//! assert_eq!(list.list()[0], guide);
//! assert!(!form.is_open());
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod reveal;
pub mod types;

// Re-exports
pub use config::SectionConfig;
pub use error::{GuideError, GuideResult};
pub use form::{DialogState, DraftForm};
pub use list::GuideList;
pub use reveal::{stagger_delay, RevealMode, RevealOffset, SectionGeometry, VisibilityTracker};
pub use types::*;
