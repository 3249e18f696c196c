use crate::error::IndexError;
use crate::models::question::{Question, QuestionId};
use serde::Serialize;
use tracing::{debug, warn};

/// 有序题目列表
///
/// 顺序即问卷中的题号；列表内 id 唯一。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加到末尾
    ///
    /// id 已存在时忽略本次追加，保持列表 id 唯一。
    pub fn append(&mut self, question: Question) {
        if self.position(&question.id()).is_some() {
            warn!("⚠️ 题目 {} 已存在，忽略重复追加", question.id());
            return;
        }
        debug!("追加题目 #{}: {}", self.questions.len() + 1, question.id());
        self.questions.push(question);
    }

    /// 按 id 删除题目
    ///
    /// id 不存在时不做任何修改，重复删除是安全的。
    pub fn remove_by_id(&mut self, id: &QuestionId) -> Option<Question> {
        let index = self.position(id)?;
        debug!("删除题目 #{}: {}", index + 1, id);
        Some(self.questions.remove(index))
    }

    /// 将 `source` 位置的题目移动到 `dest`
    ///
    /// 先移除再插入，`dest` 是移除之后的位置；其余题目的相对顺序不变。
    /// 两个索引都必须小于当前长度。
    pub fn move_to(&mut self, source: usize, dest: usize) -> Result<(), IndexError> {
        let len = self.questions.len();
        for index in [source, dest] {
            if index >= len {
                return Err(IndexError::OutOfRange { index, len });
            }
        }
        if source == dest {
            return Ok(());
        }

        let question = self.questions.remove(source);
        self.questions.insert(dest, question);
        debug!("移动题目: {} -> {}", source, dest);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == *id)
    }

    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == *id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(Question::id).collect()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        let mut set = QuestionSet::new();
        for question in iter {
            set.append(question);
        }
        set
    }
}
