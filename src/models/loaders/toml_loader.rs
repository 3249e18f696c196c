use crate::error::{AppError, AppResult, FileError};
use crate::models::survey::SurveyDraft;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载问卷草稿
pub async fn load_survey_draft(toml_file_path: &Path) -> AppResult<SurveyDraft> {
    let path_display = toml_file_path.display().to_string();

    if !toml_file_path.exists() {
        return Err(FileError::NotFound { path: path_display }.into());
    }

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let draft: SurveyDraft =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path_display, e))?;

    Ok(draft.with_file_path(path_display))
}

/// 一个目录的加载结果
#[derive(Debug, Default)]
pub struct DraftBatch {
    /// 成功加载的草稿，按文件名排序
    pub drafts: Vec<SurveyDraft>,
    /// 加载失败的文件
    pub failed: Vec<PathBuf>,
}

/// 从文件夹中加载所有 TOML 草稿，按文件名排序
///
/// 单个文件加载失败记录警告并计入 `failed`，不影响其他文件。
pub async fn load_all_drafts(folder_path: &Path) -> AppResult<DraftBatch> {
    let folder_display = folder_path.display().to_string();

    if !folder_path.is_dir() {
        return Err(FileError::NotFound {
            path: folder_display,
        }
        .into());
    }

    let mut entries = fs::read_dir(folder_path)
        .await
        .map_err(|e| AppError::file_read_failed(&folder_display, e))?;

    let mut toml_files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(&folder_display, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut batch = DraftBatch::default();
    for path in toml_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_survey_draft(&path).await {
            Ok(draft) => {
                tracing::info!("成功加载 {} 个题目", draft.questions.len());
                batch.drafts.push(draft);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                batch.failed.push(path);
            }
        }
    }

    Ok(batch)
}
