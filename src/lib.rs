//! # Survey Designer
//!
//! 问卷设计器的核心：题目模型、有序题目列表、预览答案暂存以及问卷保存
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `HttpTransport` - 唯一的 HTTP client owner，提供 post_json() 能力
//! - `AuthContext` - 外部身份服务的抽象，提供当前用户和身份令牌
//!
//! ### ② 业务能力层（Models / Services / Clients）
//! - `models/` - `Question` 校验与构造、`QuestionSet` 追加 / 删除 / 移动
//! - `services/` - 预览答案暂存、拖拽排序判定、文本预览
//! - `clients/` - `SurveyClient`，带令牌保存整份问卷
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `SurveyDesigner` 编辑会话：用户操作 → 校验 → 列表变更 → 预览 → 保存
//!
//! ### ④ 编排层（App）
//! - `app` - 读取配置与草稿、渲染预览、逐份保存
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, SaveStats};
pub use clients::{ServerAck, SurveyClient};
pub use config::Config;
pub use error::{AppError, AppResult, IndexError, PersistError, TransportError, ValidationError};
pub use infrastructure::{
    AuthContext, CurrentUser, HttpTransport, SignedOut, StaticTokenAuth, SurveyTransport,
};
pub use models::{
    Question, QuestionId, QuestionSet, QuestionType, SurveyAggregate, SurveyDraft, NO_OPTIONS,
};
pub use services::{
    should_commit_move, DragSession, HoverThreshold, ResponseScratchStore, ScratchResponse,
};
pub use workflow::SurveyDesigner;
