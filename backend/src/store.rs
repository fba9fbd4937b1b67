use std::collections::BTreeMap;

use common::{ErrorMessage, Memo, MemoLimits};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum StoreError {
    #[error("memo {0} does not exist")]
    NotFound(i64),
    #[error("memo rejected with {} error(s)", .0.len())]
    Rejected(Vec<ErrorMessage>),
}

/// In-memory owner of every memo for the lifetime of the process.
///
/// Memos are keyed by ID, so listing always yields ascending ID order and a
/// delete never reorders the survivors.
pub(crate) struct MemoStore {
    memos: BTreeMap<i64, Memo>,
    limits: MemoLimits,
}

impl MemoStore {
    pub(crate) fn new(limits: MemoLimits) -> Self {
        Self {
            memos: BTreeMap::new(),
            limits,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.memos.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub(crate) fn get_memo_by_id(&self, id: i64) -> Option<&Memo> {
        self.memos.get(&id)
    }

    pub(crate) fn list_memos(&self) -> Vec<Memo> {
        self.memos.values().cloned().collect()
    }

    /// Stores a new memo and returns the resulting count. Nothing is stored
    /// unless every check passes; all failures are reported together.
    pub(crate) fn add_memo(&mut self, memo: Memo) -> Result<usize, StoreError> {
        let mut errors = self.check(&memo);
        if self.get_memo_by_id(memo.id).is_some() {
            log::warn!("memo id is duplicated, id = {}", memo.id);
            errors.push(ErrorMessage::id_is_duplicated());
        }
        if !errors.is_empty() {
            return Err(StoreError::Rejected(errors));
        }

        self.memos.insert(memo.id, memo);
        Ok(self.memos.len())
    }

    /// Replaces the memo with the same ID wholesale.
    pub(crate) fn update_memo(&mut self, memo: Memo) -> Result<usize, StoreError> {
        if self.get_memo_by_id(memo.id).is_none() {
            log::warn!("memo to update does not exist, id = {}", memo.id);
            return Err(StoreError::NotFound(memo.id));
        }

        let errors = self.check(&memo);
        if !errors.is_empty() {
            return Err(StoreError::Rejected(errors));
        }

        self.memos.insert(memo.id, memo);
        Ok(self.memos.len())
    }

    /// Removes the memo if present. Absent IDs are not an error here.
    pub(crate) fn delete_memo_by_id(&mut self, id: i64) -> Option<Memo> {
        self.memos.remove(&id)
    }

    fn check(&self, memo: &Memo) -> Vec<ErrorMessage> {
        let mut errors = memo.validate(&self.limits);

        // A memo may keep its own title; only other IDs can collide.
        let collides = self
            .memos
            .values()
            .any(|other| other.id != memo.id && other.title == memo.title);
        if collides {
            log::warn!("memo title is duplicated, title = {}", memo.title);
            errors.push(ErrorMessage::title_is_duplicated());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::codes;

    fn store_with(memos: &[(i64, &str)]) -> MemoStore {
        let mut store = MemoStore::new(MemoLimits::default());
        for (id, title) in memos {
            store.add_memo(Memo::new(*id, *title, "body")).unwrap();
        }
        store
    }

    fn rejected_codes(result: Result<usize, StoreError>) -> Vec<String> {
        match result {
            Err(StoreError::Rejected(errors)) => errors.into_iter().map(|e| e.code).collect(),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_add_then_get() {
        let mut store = MemoStore::new(MemoLimits::default());
        let memo = Memo::new(42, "title", "body");
        assert_eq!(store.add_memo(memo.clone()), Ok(1));
        assert_eq!(store.get_memo_by_id(42), Some(&memo));
        assert_eq!(store.get_memo_by_id(43), None);
    }

    #[test]
    fn test_add_counts_up() {
        let mut store = store_with(&[(1, "a"), (2, "b")]);
        assert_eq!(store.add_memo(Memo::new(3, "c", "body")), Ok(3));
    }

    #[test]
    fn test_add_duplicate_id_leaves_store_unchanged() {
        let mut store = store_with(&[(1, "a")]);
        let got = rejected_codes(store.add_memo(Memo::new(1, "other", "changed")));
        assert_eq!(got, vec![codes::ID_IS_DUPLICATED]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_memo_by_id(1).unwrap().title, "a");
    }

    #[test]
    fn test_add_duplicate_title_rejected() {
        let mut store = store_with(&[(1, "a")]);
        let got = rejected_codes(store.add_memo(Memo::new(2, "a", "body")));
        assert_eq!(got, vec![codes::TITLE_IS_DUPLICATED]);
        assert_eq!(store.len(), 1);
        assert!(store.get_memo_by_id(2).is_none());
    }

    #[test]
    fn test_add_same_id_same_title_only_reports_id() {
        let mut store = store_with(&[(1, "a")]);
        let got = rejected_codes(store.add_memo(Memo::new(1, "a", "body")));
        assert_eq!(got, vec![codes::ID_IS_DUPLICATED]);
    }

    #[test]
    fn test_add_reports_every_failure_at_once() {
        let mut store = store_with(&[(1, "a"), (2, "taken")]);
        let got = rejected_codes(store.add_memo(Memo::new(1, "taken", "")));
        assert_eq!(
            got,
            vec![
                codes::INVALID_BODY,
                codes::TITLE_IS_DUPLICATED,
                codes::ID_IS_DUPLICATED
            ]
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = store_with(&[(1, "a")]);
        assert_eq!(
            store.update_memo(Memo::new(9, "z", "body")),
            Err(StoreError::NotFound(9))
        );
        assert_eq!(store.len(), 1);
        assert!(store.get_memo_by_id(9).is_none());
    }

    #[test]
    fn test_update_replaces_whole_memo() {
        let mut store = store_with(&[(1, "a")]);
        let mut replacement = Memo::new(1, "renamed", "new body");
        replacement.created_at =
            chrono::DateTime::parse_from_rfc3339("2022-01-01T10:00:00+09:00").ok();
        assert_eq!(store.update_memo(replacement.clone()), Ok(1));
        assert_eq!(store.get_memo_by_id(1), Some(&replacement));
    }

    #[test]
    fn test_update_may_keep_own_title() {
        let mut store = store_with(&[(1, "a"), (2, "b")]);
        assert_eq!(store.update_memo(Memo::new(1, "a", "edited")), Ok(2));
        assert_eq!(store.get_memo_by_id(1).unwrap().body, "edited");
    }

    #[test]
    fn test_update_cannot_take_another_title() {
        let mut store = store_with(&[(1, "a"), (2, "b")]);
        let got = rejected_codes(store.update_memo(Memo::new(1, "b", "edited")));
        assert_eq!(got, vec![codes::TITLE_IS_DUPLICATED]);
        assert_eq!(store.get_memo_by_id(1).unwrap().title, "a");
    }

    #[test]
    fn test_update_validates_fields() {
        let mut store = store_with(&[(1, "a")]);
        let got = rejected_codes(store.update_memo(Memo::new(1, "", "")));
        assert_eq!(got, vec![codes::INVALID_TITLE, codes::INVALID_BODY]);
        assert_eq!(store.get_memo_by_id(1).unwrap().body, "body");
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut store = store_with(&[(1, "a"), (2, "b"), (3, "c")]);
        assert_eq!(store.delete_memo_by_id(2).map(|m| m.id), Some(2));
        assert_eq!(store.len(), 2);
        assert!(store.delete_memo_by_id(2).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_order_survives_delete() {
        let mut store = store_with(&[(3, "c"), (1, "a"), (2, "b")]);
        store.delete_memo_by_id(1);
        let ids: Vec<i64> = store.list_memos().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_custom_body_limit() {
        let mut store = MemoStore::new(MemoLimits::with_body_max_chars(500));
        assert_eq!(store.add_memo(Memo::new(1, "long", "x".repeat(500))), Ok(1));
        let got = rejected_codes(store.add_memo(Memo::new(2, "longer", "x".repeat(501))));
        assert_eq!(got, vec![codes::INVALID_BODY]);
    }
}
