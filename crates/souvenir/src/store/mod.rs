//! The moment store.
//!
//! A static, immutable, ordered list of moments, seeded in source and held
//! for the lifetime of the process. Construction is fail-fast: an empty
//! list is rejected, and the seed's date literals are parsed strictly.
//! Chronological ordering is an authoring-time invariant, checked by the
//! seed's tests rather than at runtime.

mod seed;

pub use seed::seed;

use crate::error::{Error, Result};
use crate::moment::Moment;

/// An ordered, non-empty sequence of moments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomentStore {
    moments: Vec<Moment>,
}

impl MomentStore {
    /// Build a store from the given records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] when `moments` is empty; a valid index
    /// could never exist over a zero-length sequence.
    pub fn new(moments: Vec<Moment>) -> Result<Self> {
        if moments.is_empty() {
            return Err(Error::EmptyStore);
        }
        Ok(Self { moments })
    }

    /// Number of moments in the store. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moments.len()
    }

    /// Always false; the constructor rejects empty stores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// The moment at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Moment> {
        self.moments.get(index)
    }

    /// The most recent moment in authoring order.
    #[must_use]
    pub fn last(&self) -> &Moment {
        &self.moments[self.moments.len() - 1]
    }

    /// Iterate over the moments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Moment> {
        self.moments.iter()
    }
}

impl<'a> IntoIterator for &'a MomentStore {
    type Item = &'a Moment;
    type IntoIter = std::slice::Iter<'a, Moment>;

    fn into_iter(self) -> Self::IntoIter {
        self.moments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moment::Diary;
    use crate::timeline::parse_date;

    fn moment(date: &str, title: &str) -> Moment {
        Moment {
            date: parse_date(date).unwrap(),
            title: title.to_string(),
            subtext: None,
            image: None,
            theme: None,
            diary: Diary::new("一段记录。"),
        }
    }

    #[test]
    fn test_empty_store_is_rejected() {
        let result = MomentStore::new(Vec::new());
        assert!(matches!(result, Err(Error::EmptyStore)));
    }

    #[test]
    fn test_single_record_store() {
        let store = MomentStore::new(vec![moment("2022-04-24", "初次相遇")]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.get(0).unwrap().title, "初次相遇");
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_last_returns_final_record() {
        let store = MomentStore::new(vec![
            moment("2022-04-24", "初次相遇"),
            moment("2023-02-04", "再相遇"),
        ])
        .unwrap();
        assert_eq!(store.last().title, "再相遇");
    }

    #[test]
    fn test_iteration_preserves_order() {
        let store = MomentStore::new(vec![
            moment("2022-04-24", "一"),
            moment("2022-05-01", "二"),
            moment("2022-06-01", "三"),
        ])
        .unwrap();
        let titles: Vec<&str> = store.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["一", "二", "三"]);
    }
}
