//! Section context for the Guides shell.
//!
//! Provides the guide list and section configuration to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| guides);
//!
//! // In child components
//! let guides = use_guides();
//! ```

use dioxus::prelude::*;
use guides_core::{GuideList, SectionConfig};

/// Get the section configuration for the application.
/// Uses the global config set from command line args.
pub fn get_section_config() -> SectionConfig {
    crate::get_section_config()
}

/// Hook to access the guide list from context.
///
/// The list lives for the lifetime of the window and is discarded on close.
pub fn use_guides() -> Signal<GuideList> {
    use_context::<Signal<GuideList>>()
}

/// Hook to access the section configuration from context.
pub fn use_section_config() -> SectionConfig {
    use_context::<SectionConfig>()
}
