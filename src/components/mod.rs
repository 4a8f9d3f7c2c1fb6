//! UI Components for the Guides section.

mod guide_card;
mod guide_creator;
mod guides_section;
mod reveal_observer;

pub use guide_card::GuideCard;
pub use guide_creator::GuideCreator;
pub use guides_section::GuidesSection;
pub use reveal_observer::use_reveal;
