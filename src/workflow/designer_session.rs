//! 问卷编辑会话 - 流程层
//!
//! 核心职责：持有题目列表和预览答案，把用户操作落到数据模型上
//!
//! 流程顺序：
//! 1. 输入 → 题目校验 → 追加到列表
//! 2. 拖拽 / 删除 → 列表变更（删除时同时清理暂存答案）
//! 3. 保存 → 构造问卷快照 → 保存客户端

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::clients::{ServerAck, SurveyClient};
use crate::error::{IndexError, PersistError, ValidationError};
use crate::infrastructure::{AuthContext, SurveyTransport};
use crate::models::{
    Question, QuestionId, QuestionSet, QuestionType, SurveyAggregate, SurveyDraft,
};
use crate::services::{render_preview, DragSession, HoverThreshold, ResponseScratchStore};
use crate::utils::logging::truncate_text;

/// 问卷编辑会话
///
/// - 题目列表和暂存答案只属于这一个会话
/// - 所有修改都是同步的，由离散的用户操作触发
/// - 同一时间最多一个保存请求
#[derive(Debug, Default)]
pub struct SurveyDesigner {
    title: String,
    questions: QuestionSet,
    responses: ResponseScratchStore,
    hover_threshold: HoverThreshold,
    saving: AtomicBool,
}

/// 保存进行中标记，离开作用域时自动清除
struct SavingGuard<'a>(&'a AtomicBool);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SurveyDesigner {
    /// 创建空白问卷
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hover_threshold(mut self, threshold: HoverThreshold) -> Self {
        self.hover_threshold = threshold;
        self
    }

    /// 从草稿创建，任一题目非法即失败
    pub fn from_draft(draft: SurveyDraft) -> Result<Self, (usize, ValidationError)> {
        let title = draft.title.clone();
        let questions = draft.into_questions()?;
        Ok(Self {
            title,
            questions,
            ..Self::default()
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn responses(&self) -> &ResponseScratchStore {
        &self.responses
    }

    /// 预览答案，只影响预览
    pub fn responses_mut(&mut self) -> &mut ResponseScratchStore {
        &mut self.responses
    }

    /// 校验并追加一道题目
    ///
    /// # 返回
    /// 返回新题目的 id；校验失败时列表保持不变
    pub fn add_question<I, S>(
        &mut self,
        kind: QuestionType,
        text: &str,
        options: I,
    ) -> Result<QuestionId, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = Question::create(kind, text, options)?;
        let id = question.id();
        info!(
            "➕ 添加第 {} 题 [{}]: {}",
            self.questions.len() + 1,
            kind.label(),
            truncate_text(question.text(), 40)
        );
        self.questions.append(question);
        Ok(id)
    }

    /// 删除题目及其暂存答案，id 不存在时什么也不做
    pub fn remove_question(&mut self, id: &QuestionId) -> Option<Question> {
        self.responses.clear(id);
        let removed = self.questions.remove_by_id(id);
        if removed.is_some() {
            info!("➖ 删除题目 {}，剩余 {} 题", id, self.questions.len());
        }
        removed
    }

    /// 将题目从 `source` 移动到 `dest`
    pub fn reorder(&mut self, source: usize, dest: usize) -> Result<(), IndexError> {
        self.questions.move_to(source, dest)
    }

    /// 开始拖拽第 `index` 题
    pub fn begin_drag(&self, index: usize) -> Result<DragSession, IndexError> {
        DragSession::begin(&self.questions, index, self.hover_threshold)
    }

    /// 拖拽过程中指针悬停，满足阈值时移动题目
    pub fn drag_hover(
        &mut self,
        drag: &mut DragSession,
        hover_index: usize,
        pointer_fraction: f64,
    ) -> Result<Option<(usize, usize)>, IndexError> {
        drag.hover(&mut self.questions, hover_index, pointer_fraction)
    }

    /// 当前内容的问卷快照
    pub fn snapshot(&self) -> SurveyAggregate {
        SurveyAggregate::new(self.title.clone(), self.questions.clone())
    }

    /// 文本预览
    pub fn preview(&self) -> String {
        render_preview(&self.title, &self.questions, &self.responses)
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// 保存当前问卷
    ///
    /// 已有保存在进行中时立即返回 `SaveInProgress`。失败不会改动内存中的问卷，可以手动重试。
    pub async fn save<A, T>(&self, client: &SurveyClient<A, T>) -> Result<ServerAck, PersistError>
    where
        A: AuthContext,
        T: SurveyTransport,
    {
        if self
            .saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("⚠️ 已有保存请求在进行中，忽略本次保存");
            return Err(PersistError::SaveInProgress);
        }
        let _guard = SavingGuard(&self.saving);

        let aggregate = self.snapshot();
        debug!(
            "📋 提交问卷: 标题={:?}, 题目数={}",
            aggregate.title(),
            aggregate.questions().len()
        );
        client.save(&aggregate).await
    }
}
