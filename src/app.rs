use crate::clients::SurveyClient;
use crate::config::Config;
use crate::infrastructure::{AuthContext, HttpTransport, StaticTokenAuth};
use crate::models::{load_all_drafts, load_survey_draft, DraftBatch, SurveyDraft};
use crate::services::HoverThreshold;
use crate::utils::logging::{log_save_result, log_startup};
use crate::workflow::SurveyDesigner;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: SurveyClient<StaticTokenAuth, HttpTransport>,
}

/// 保存统计
///
/// `failed` 包含加载失败的文件，`skipped` 是 DRY_RUN 下只预览未保存的草稿。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveStats {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

/// 单份草稿的处理结果
enum DraftOutcome {
    Saved,
    Skipped,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let auth = StaticTokenAuth::from_token(config.id_token.clone());
        let client = SurveyClient::new(&config, auth, HttpTransport::new());

        Self { config, client }
    }

    /// 运行应用主逻辑：加载草稿 → 预览 → 保存
    pub async fn run(&self) -> Result<SaveStats> {
        let DraftBatch { drafts, failed } = load_drafts(&self.config).await?;

        if drafts.is_empty() && failed.is_empty() {
            warn!("⚠️ 没有找到问卷草稿，程序结束");
            return Ok(SaveStats::default());
        }

        let mut stats = SaveStats {
            failed: failed.len(),
            total: drafts.len() + failed.len(),
            ..Default::default()
        };

        for draft in drafts {
            let source = draft.file_path.clone().unwrap_or_default();
            match self.process_draft(draft).await {
                Ok(DraftOutcome::Saved) => stats.saved += 1,
                Ok(DraftOutcome::Skipped) => stats.skipped += 1,
                Err(e) => {
                    error!("❌ 处理草稿失败 {}: {:#}", source, e);
                    stats.failed += 1;
                }
            }
        }

        log_save_result(&stats);
        Ok(stats)
    }

    async fn process_draft(&self, draft: SurveyDraft) -> Result<DraftOutcome> {
        let source = draft.file_path.clone().unwrap_or_default();
        let designer = SurveyDesigner::from_draft(draft)
            .map_err(|(index, e)| anyhow::anyhow!("第 {} 题校验失败: {}", index, e))?
            .with_hover_threshold(HoverThreshold::new(self.config.hover_dead_zone));

        println!("{}", designer.preview());

        if self.config.dry_run {
            info!("📝 DRY_RUN 已开启，跳过保存: {}", source);
            return Ok(DraftOutcome::Skipped);
        }

        if let Some(user) = self.client.auth().current_user() {
            info!("👤 当前用户: {}", user.display_label());
        }

        let ack = designer
            .save(&self.client)
            .await
            .with_context(|| format!("保存问卷失败: {}", source))?;
        info!("✓ 服务端响应: {}", ack.into_inner());

        Ok(DraftOutcome::Saved)
    }
}

/// 按配置加载草稿：目录则加载其中全部 TOML 文件
async fn load_drafts(config: &Config) -> Result<DraftBatch> {
    let path = Path::new(&config.draft_file);
    info!("\n📁 正在加载问卷草稿: {}", path.display());

    if path.is_dir() {
        Ok(load_all_drafts(path).await?)
    } else {
        Ok(DraftBatch {
            drafts: vec![load_survey_draft(path).await?],
            failed: Vec::new(),
        })
    }
}
