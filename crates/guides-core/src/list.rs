//! Ordered in-memory guide list
//!
//! Newest guides sit at index 0. The list lives only as long as its owner;
//! nothing here persists.

use chrono::NaiveDate;
use ulid::Generator;

use crate::error::{GuideError, GuideResult};
use crate::types::{DraftGuide, Guide, GuideId};

const SEED_AUTHOR: &str = "Администратор";

/// Built-in guides shown before anyone publishes: (id, title, description, content, date)
const SEED_GUIDES: [(&str, &str, &str, &str, (i32, u32, u32)); 3] = [
    (
        "1",
        "Гайд для новичков",
        "Основы игры и первые шаги в мире богов",
        "Начните свой путь с выбора фракции. Каждая фракция имеет уникальные бонусы и стиль игры...",
        (2024, 1, 15),
    ),
    (
        "2",
        "Строительство империи",
        "Как эффективно развивать города и экономику",
        "Правильное размещение зданий критически важно. Начните с храма в центре города...",
        (2024, 1, 20),
    ),
    (
        "3",
        "Битвы и альянсы",
        "Тактика ведения войн и создания союзов",
        "Координация с союзниками - ключ к победе. Используйте чат альянса для планирования атак...",
        (2024, 1, 25),
    ),
];

/// Ordered, append-at-front collection of guides
pub struct GuideList {
    guides: Vec<Guide>,
    ids: Generator,
}

impl GuideList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            guides: Vec::new(),
            ids: Generator::new(),
        }
    }

    /// Create a list holding the three built-in guides, oldest first
    pub fn seeded() -> Self {
        let guides = SEED_GUIDES
            .iter()
            .filter_map(|(id, title, description, content, (y, m, d))| {
                let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
                Some(Guide {
                    id: GuideId::from_string(*id),
                    title: (*title).to_string(),
                    description: (*description).to_string(),
                    content: (*content).to_string(),
                    author: SEED_AUTHOR.to_string(),
                    date,
                })
            })
            .collect();

        Self {
            guides,
            ids: Generator::new(),
        }
    }

    /// Validate a draft and prepend it, stamped with today's UTC date
    pub fn create(&mut self, draft: &DraftGuide) -> GuideResult<Guide> {
        self.create_on(draft, chrono::Utc::now().date_naive())
    }

    /// Validate a draft and prepend it with an explicit creation date.
    ///
    /// On error the list is left exactly as it was.
    pub fn create_on(&mut self, draft: &DraftGuide, date: NaiveDate) -> GuideResult<Guide> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(GuideError::MissingFields(missing));
        }

        let ulid = self
            .ids
            .generate()
            .map_err(|e| GuideError::IdGeneration(e.to_string()))?;
        let guide = Guide::from_draft(GuideId::from_ulid(ulid), draft, date);

        tracing::debug!(id = %guide.id, date = %guide.date, "Guide created");

        self.guides.insert(0, guide.clone());
        Ok(guide)
    }

    /// Current contents, newest first
    pub fn list(&self) -> &[Guide] {
        &self.guides
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Guide> {
        self.guides.iter()
    }

    pub fn get(&self, id: &GuideId) -> Option<&Guide> {
        self.guides.iter().find(|g| &g.id == id)
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

impl Default for GuideList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GuideList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuideList")
            .field("guides", &self.guides)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a GuideList {
    type Item = &'a Guide;
    type IntoIter = std::slice::Iter<'a, Guide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GuideField;
    use std::collections::HashSet;

    fn filled(title: &str) -> DraftGuide {
        DraftGuide::new()
            .with(GuideField::Title, title)
            .with(GuideField::Description, "D")
            .with(GuideField::Content, "C")
            .with(GuideField::Author, "A")
    }

    #[test]
    fn test_seeded_order_and_ids() {
        let list = GuideList::seeded();
        assert_eq!(list.len(), 3);
        let ids: Vec<_> = list.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(list.list()[0].date_string(), "2024-01-15");
        assert_eq!(list.list()[2].date_string(), "2024-01-25");
        assert!(list.iter().all(|g| g.author == SEED_AUTHOR));
    }

    #[test]
    fn test_new_is_empty() {
        let list = GuideList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_create_prepends() {
        let mut list = GuideList::seeded();
        let guide = list.create(&filled("T")).unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(list.list()[0], guide);
        assert_eq!(list.list()[0].title, "T");
        let rest: Vec<_> = list.list()[1..].iter().map(|g| g.id.as_str()).collect();
        assert_eq!(rest, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_create_rejects_empty_field() {
        let mut list = GuideList::seeded();
        let draft = filled("").with(GuideField::Author, "");

        let err = list.create(&draft).unwrap_err();
        assert_eq!(
            err,
            GuideError::MissingFields(vec![GuideField::Title, GuideField::Author])
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_create_on_uses_given_date() {
        let mut list = GuideList::new();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let guide = list.create_on(&filled("T"), date).unwrap();
        assert_eq!(guide.date_string(), "2025-12-31");
    }

    #[test]
    fn test_create_stamps_today() {
        let mut list = GuideList::new();
        let before = chrono::Utc::now().date_naive();
        let guide = list.create(&filled("T")).unwrap();
        let after = chrono::Utc::now().date_naive();
        assert!(guide.date == before || guide.date == after);
        assert_eq!(guide.date_string().len(), 10);
    }

    #[test]
    fn test_rapid_creates_have_unique_ids() {
        let mut list = GuideList::seeded();
        for i in 0..200 {
            list.create(&filled(&format!("guide {}", i))).unwrap();
        }
        let ids: HashSet<_> = list.iter().map(|g| g.id.clone()).collect();
        assert_eq!(ids.len(), 203);
    }

    #[test]
    fn test_generated_ids_sort_newest_first() {
        let mut list = GuideList::new();
        list.create(&filled("a")).unwrap();
        list.create(&filled("b")).unwrap();
        let ids: Vec<_> = list.iter().map(|g| g.id.as_str().to_string()).collect();
        assert!(ids[0] > ids[1]);
    }

    #[test]
    fn test_get_by_id() {
        let mut list = GuideList::seeded();
        let guide = list.create(&filled("find me")).unwrap();
        assert_eq!(list.get(&guide.id).map(|g| g.title.as_str()), Some("find me"));
        assert!(list.get(&GuideId::from_string("missing")).is_none());
    }
}
