//! Draft form and creation dialog state
//!
//! The form owns the draft exclusively. A draft only reaches the
//! [`GuideList`] through [`DraftForm::submit`].

use crate::error::GuideResult;
use crate::list::GuideList;
use crate::types::{DraftGuide, Guide, GuideField};

/// Visibility of the creation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn open(&mut self) {
        *self = DialogState::Open;
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open)
    }
}

/// Transient input state for a new guide plus its dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    draft: DraftGuide,
    dialog: DialogState,
    missing: Vec<GuideField>,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftGuide {
        &self.draft
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Fields reported empty by the last rejected submit
    pub fn missing(&self) -> &[GuideField] {
        &self.missing
    }

    pub fn is_missing(&self, field: GuideField) -> bool {
        self.missing.contains(&field)
    }

    /// Closed -> Open
    pub fn open(&mut self) {
        self.dialog.open();
    }

    /// Close without committing. The draft is kept so reopening resumes it.
    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    /// Host-driven dismissal (overlay click, Escape). Same as cancel.
    pub fn dismiss(&mut self) {
        self.cancel();
    }

    /// Close and clear the draft
    pub fn discard(&mut self) {
        self.reset();
        self.dialog.close();
    }

    /// Overwrite one field; any string is accepted here
    pub fn set_field(&mut self, field: GuideField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.missing.retain(|f| *f != field);
    }

    /// Restore all four fields to empty
    pub fn reset(&mut self) {
        self.draft = DraftGuide::default();
        self.missing.clear();
    }

    /// Commit the draft into `list`.
    ///
    /// On success the draft is reset and the dialog closes. On failure the
    /// draft and dialog are untouched and the missing fields are recorded.
    pub fn submit(&mut self, list: &mut GuideList) -> GuideResult<Guide> {
        match list.create(&self.draft) {
            Ok(guide) => {
                self.reset();
                self.dialog.close();
                Ok(guide)
            }
            Err(err) => {
                tracing::debug!(missing = ?err.missing_fields(), "Guide submit rejected");
                self.missing = err.missing_fields().to_vec();
                Err(err)
            }
        }
    }
}
