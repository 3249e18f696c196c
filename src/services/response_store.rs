//! 预览答案暂存 - 业务能力层
//!
//! 只服务于实时预览，不随问卷保存。

use crate::models::QuestionId;
use std::collections::{BTreeSet, HashMap};

/// 单道题目的暂存答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchResponse {
    /// 单选、简答、长文本
    Single(String),
    /// 多选
    Multi(BTreeSet<String>),
}

/// 预览答案暂存
///
/// 不校验答案是否属于题目选项，由调用方保证。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseScratchStore {
    responses: HashMap<QuestionId, ScratchResponse>,
}

impl ResponseScratchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 覆盖单值答案
    pub fn set_single(&mut self, question_id: QuestionId, value: impl Into<String>) {
        self.responses
            .insert(question_id, ScratchResponse::Single(value.into()));
    }

    /// 勾选或取消勾选多选项
    ///
    /// 重复勾选、重复取消都不会改变状态。集合清空后整条记录被移除。
    pub fn toggle_multi(&mut self, question_id: QuestionId, value: &str, included: bool) {
        if included {
            match self.responses.get_mut(&question_id) {
                Some(ScratchResponse::Multi(selected)) => {
                    selected.insert(value.to_string());
                }
                _ => {
                    self.responses.insert(
                        question_id,
                        ScratchResponse::Multi(BTreeSet::from([value.to_string()])),
                    );
                }
            }
            return;
        }

        if let Some(ScratchResponse::Multi(selected)) = self.responses.get_mut(&question_id) {
            selected.remove(value);
            if selected.is_empty() {
                self.responses.remove(&question_id);
            }
        }
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&ScratchResponse> {
        self.responses.get(question_id)
    }

    /// 单值答案
    pub fn single(&self, question_id: &QuestionId) -> Option<&str> {
        match self.responses.get(question_id) {
            Some(ScratchResponse::Single(value)) => Some(value),
            _ => None,
        }
    }

    /// 判断某个选项当前是否被选中（单选或多选）
    pub fn is_selected(&self, question_id: &QuestionId, value: &str) -> bool {
        match self.responses.get(question_id) {
            Some(ScratchResponse::Single(current)) => current == value,
            Some(ScratchResponse::Multi(selected)) => selected.contains(value),
            None => false,
        }
    }

    pub fn clear(&mut self, question_id: &QuestionId) -> Option<ScratchResponse> {
        self.responses.remove(question_id)
    }

    pub fn clear_all(&mut self) {
        self.responses.clear();
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionType, NO_OPTIONS};

    fn new_id() -> QuestionId {
        Question::create(QuestionType::ShortText, "q", NO_OPTIONS)
            .unwrap()
            .id()
    }

    #[test]
    fn test_set_single_overwrites() {
        let id = new_id();
        let mut store = ResponseScratchStore::new();
        store.set_single(id, "first");
        store.set_single(id, "second");
        assert_eq!(store.single(&id), Some("second"));
        assert!(store.is_selected(&id, "second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let id = new_id();
        let other = new_id();
        let mut store = ResponseScratchStore::new();
        store.set_single(other, "kept");
        let before = store.clone();

        store.toggle_multi(id, "Red", true);
        assert!(store.is_selected(&id, "Red"));
        store.toggle_multi(id, "Red", false);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let id = new_id();
        let mut store = ResponseScratchStore::new();
        store.toggle_multi(id, "Red", true);
        store.toggle_multi(id, "Red", true);
        store.toggle_multi(id, "Blue", true);
        assert_eq!(
            store.get(&id),
            Some(&ScratchResponse::Multi(BTreeSet::from([
                "Blue".to_string(),
                "Red".to_string()
            ])))
        );

        store.toggle_multi(id, "Green", false);
        store.toggle_multi(id, "Blue", false);
        store.toggle_multi(id, "Blue", false);
        assert!(store.is_selected(&id, "Red"));
        assert!(!store.is_selected(&id, "Blue"));
    }

    #[test]
    fn test_clear() {
        let a = new_id();
        let b = new_id();
        let mut store = ResponseScratchStore::new();
        store.set_single(a, "x");
        store.toggle_multi(b, "y", true);

        assert!(store.clear(&a).is_some());
        assert!(store.clear(&a).is_none());
        assert_eq!(store.len(), 1);

        store.clear_all();
        assert!(store.is_empty());
    }
}
