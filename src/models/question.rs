use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 题目唯一标识
///
/// 创建题目时生成，之后不可变，也不会被复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    /// 单选题
    MultipleChoice,
    /// 多选题
    CheckboxList,
    /// 简答
    ShortText,
    /// 长文本
    LongText,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::MultipleChoice,
        QuestionType::CheckboxList,
        QuestionType::ShortText,
        QuestionType::LongText,
    ];

    /// 该题型是否需要选项
    pub fn requires_options(self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::CheckboxList)
    }

    /// 序列化时使用的标识
    pub fn id(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multipleChoice",
            QuestionType::CheckboxList => "checkboxList",
            QuestionType::ShortText => "shortText",
            QuestionType::LongText => "longText",
        }
    }

    /// 界面显示名称
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::CheckboxList => "Checkbox List",
            QuestionType::ShortText => "Short Text",
            QuestionType::LongText => "Long Text",
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("未知题型: {}", s))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 不带选项，用于简答和长文本题
pub const NO_OPTIONS: [&str; 0] = [];

/// 一道问卷题目
///
/// 只能通过 [`Question::create`] 构造，构造前完成校验，因此不存在非法状态的题目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "type")]
    kind: QuestionType,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Question {
    /// 校验输入并创建题目
    ///
    /// # 参数
    /// - `kind`: 题型
    /// - `text`: 题干，去除首尾空白后不能为空
    /// - `options`: 候选选项，仅选择题使用；空白选项会被过滤，过滤后至少保留两个。
    ///   非选择题可传 [`NO_OPTIONS`]
    ///
    /// # 返回
    /// 返回带有新 id 的题目，或校验错误
    pub fn create<I, S>(kind: QuestionType, text: &str, options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::TextRequired);
        }

        let options = if kind.requires_options() {
            let valid: Vec<String> = options
                .into_iter()
                .filter_map(|opt| {
                    let opt = opt.as_ref().trim();
                    (!opt.is_empty()).then(|| opt.to_string())
                })
                .collect();

            if valid.len() < 2 {
                return Err(ValidationError::NotEnoughOptions);
            }
            Some(valid)
        } else {
            None
        };

        Ok(Self {
            id: QuestionId::generate(),
            kind,
            text: text.to_string(),
            options,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 选项列表，非选择题返回 `None`
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }
}
