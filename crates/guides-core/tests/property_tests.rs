//! Property-based tests for the guide list and draft form
//!
//! Uses proptest to check ordering, uniqueness and validation invariants.

use std::collections::HashSet;

use guides_core::{DraftForm, DraftGuide, GuideField, GuideList, VisibilityTracker};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Field values including empty and whitespace-only strings
fn field_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
        4 => prop::string::string_regex("[a-zA-Zа-я0-9 ]{1,40}").expect("valid regex"),
    ]
}

fn draft_strategy() -> impl Strategy<Value = DraftGuide> {
    (
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
    )
        .prop_map(|(title, description, content, author)| DraftGuide {
            title,
            description,
            content,
            author,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A submit either grows the list by one at index 0 or changes nothing
    #[test]
    fn submit_prepends_or_leaves_untouched(drafts in prop::collection::vec(draft_strategy(), 1..30)) {
        let mut list = GuideList::seeded();
        let mut form = DraftForm::new();

        for draft in drafts {
            form.open();
            for field in GuideField::ALL {
                form.set_field(field, draft.get(field));
            }
            let before: Vec<_> = list.iter().map(|g| g.id.clone()).collect();
            let complete = draft.missing_fields().is_empty();

            match form.submit(&mut list) {
                Ok(guide) => {
                    prop_assert!(complete);
                    prop_assert_eq!(list.len(), before.len() + 1);
                    prop_assert_eq!(&list.list()[0], &guide);
                    let rest: Vec<_> = list.list()[1..].iter().map(|g| g.id.clone()).collect();
                    prop_assert_eq!(rest, before);
                    prop_assert!(!form.is_open());
                }
                Err(_) => {
                    prop_assert!(!complete);
                    let after: Vec<_> = list.iter().map(|g| g.id.clone()).collect();
                    prop_assert_eq!(after, before);
                    prop_assert!(form.is_open());
                    prop_assert_eq!(form.draft(), &draft);
                }
            }
        }
    }

    /// IDs stay unique however many guides are created back to back
    #[test]
    fn ids_are_unique(count in 1usize..300) {
        let mut list = GuideList::seeded();
        let draft = DraftGuide::new()
            .with(GuideField::Title, "t")
            .with(GuideField::Description, "d")
            .with(GuideField::Content, "c")
            .with(GuideField::Author, "a");
        for _ in 0..count {
            list.create(&draft).unwrap();
        }
        let ids: HashSet<_> = list.iter().map(|g| g.id.clone()).collect();
        prop_assert_eq!(ids.len(), count + 3);
    }

    /// Once revealed, a latching tracker never hides again
    #[test]
    fn latch_is_one_way(ratios in prop::collection::vec(0.0f64..=1.0, 1..50)) {
        let mut tracker = VisibilityTracker::default();
        let mut seen = false;
        for ratio in ratios {
            seen |= ratio >= 0.3;
            prop_assert_eq!(tracker.observe(ratio), seen);
        }
    }
}
