use crate::error::ValidationError;
use crate::models::question::{Question, QuestionType};
use crate::models::question_set::QuestionSet;
use serde::{Deserialize, Serialize};

/// 保存时提交的问卷
///
/// 每次保存都重新构造，构造之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyAggregate {
    questions: QuestionSet,
    title: String,
}

impl SurveyAggregate {
    pub fn new(title: impl Into<String>, questions: QuestionSet) -> Self {
        Self {
            questions,
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }
}

/// 问卷草稿中的一道题，尚未校验
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<Question, ValidationError> {
        Question::create(self.kind, &self.text, &self.options)
    }
}

/// 从 TOML 文件读取的问卷草稿
///
/// ```toml
/// title = "Lunch"
///
/// [[questions]]
/// type = "multipleChoice"
/// text = "Pick one"
/// options = ["Soup", "Salad"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
    #[serde(skip)]
    pub file_path: Option<String>,
}

impl SurveyDraft {
    /// 逐题校验，遇到第一道非法题目即返回其序号（从1开始）和错误
    pub fn into_questions(self) -> Result<QuestionSet, (usize, ValidationError)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, draft)| draft.validate().map_err(|e| (i + 1, e)))
            .collect()
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}
