//! Core types for the Guides section

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a guide
///
/// Generated guides use ULIDs from a monotonic generator, so IDs created
/// within the same millisecond still differ and sort by creation order.
/// Built-in guides keep their short literal IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideId(String);

impl GuideId {
    /// Create a GuideId from a ULID
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }

    /// Create a GuideId from any string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the string form of the ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the four author-supplied text fields of a guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideField {
    Title,
    Description,
    Content,
    Author,
}

impl GuideField {
    /// All fields in form order
    pub const ALL: [GuideField; 4] = [
        GuideField::Title,
        GuideField::Description,
        GuideField::Content,
        GuideField::Author,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GuideField::Title => "title",
            GuideField::Description => "description",
            GuideField::Content => "content",
            GuideField::Author => "author",
        }
    }

    /// Form label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            GuideField::Title => "Название гайда",
            GuideField::Description => "Краткое описание",
            GuideField::Content => "Содержание гайда",
            GuideField::Author => "Автор",
        }
    }

    /// Placeholder text for the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            GuideField::Title => "Например: Лучшие стратегии для новичков",
            GuideField::Description => "Опишите суть гайда в одном предложении",
            GuideField::Content => "Подробно опишите свой гайд...",
            GuideField::Author => "Ваше имя или ник",
        }
    }

    /// Whether the field is edited with a multi-line input
    pub fn is_multiline(&self) -> bool {
        matches!(self, GuideField::Content)
    }
}

impl std::fmt::Display for GuideField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guide under construction in the creation form
///
/// Fields accept any string; validation happens only at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftGuide {
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
}

impl DraftGuide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field
    pub fn get(&self, field: GuideField) -> &str {
        match field {
            GuideField::Title => &self.title,
            GuideField::Description => &self.description,
            GuideField::Content => &self.content,
            GuideField::Author => &self.author,
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: GuideField, value: impl Into<String>) {
        let slot = match field {
            GuideField::Title => &mut self.title,
            GuideField::Description => &mut self.description,
            GuideField::Content => &mut self.content,
            GuideField::Author => &mut self.author,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, field: GuideField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields that are literally empty, in form order.
    ///
    /// No trimming: a whitespace-only value counts as filled.
    pub fn missing_fields(&self) -> Vec<GuideField> {
        GuideField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        GuideField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A published guide
///
/// Immutable once created: the list never edits or removes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub id: GuideId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    /// Calendar date of creation, rendered as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Guide {
    /// Promote a draft into a guide with the given ID and date
    pub(crate) fn from_draft(id: GuideId, draft: &DraftGuide, date: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
            date,
        }
    }

    /// Creation date as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_id_from_ulid_is_unique() {
        let a = GuideId::from_ulid(Ulid::new());
        let b = GuideId::from_ulid(Ulid::from_parts(0, 1));
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 26);
    }

    #[test]
    fn test_guide_id_display() {
        let id = GuideId::from_string("1");
        assert_eq!(format!("{}", id), "1");
    }

    #[test]
    fn test_draft_default_is_empty() {
        let draft = DraftGuide::new();
        assert!(draft.is_empty());
        assert_eq!(draft.missing_fields(), GuideField::ALL.to_vec());
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = DraftGuide::new();
        draft.set(GuideField::Content, "body");
        assert_eq!(draft.get(GuideField::Content), "body");
        assert_eq!(draft.content, "body");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let draft = DraftGuide::new()
            .with(GuideField::Title, " ")
            .with(GuideField::Description, "\t")
            .with(GuideField::Content, "\n")
            .with(GuideField::Author, "  ");
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let draft = DraftGuide::new().with(GuideField::Description, "d");
        assert_eq!(
            draft.missing_fields(),
            vec![GuideField::Title, GuideField::Content, GuideField::Author]
        );
    }

    #[test]
    fn test_only_content_is_multiline() {
        let multiline: Vec<_> = GuideField::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![GuideField::Content]);
    }

    #[test]
    fn test_guide_date_string() {
        let draft = DraftGuide::new().with(GuideField::Title, "T");
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let guide = Guide::from_draft(GuideId::from_string("x"), &draft, date);
        assert_eq!(guide.date_string(), "2024-03-07");
        assert_eq!(guide.date.to_string(), "2024-03-07");
    }

    #[test]
    fn test_guide_serializes_flat() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let guide = Guide::from_draft(
            GuideId::from_string("1"),
            &DraftGuide::new().with(GuideField::Author, "A"),
            date,
        );
        let json = serde_json::to_value(&guide).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["author"], "A");
    }
}
