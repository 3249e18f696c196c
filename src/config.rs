use crate::services::reorder::DEFAULT_DEAD_ZONE;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 保存接口基础地址
    pub api_base_url: String,
    /// 问卷草稿路径（单个 TOML 文件或包含 TOML 文件的目录）
    pub draft_file: String,
    /// 外部身份服务签发的令牌，不设置即视为未登录
    pub id_token: Option<String>,
    /// 拖拽排序死区
    pub hover_dead_zone: f64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 只渲染预览，不发起保存
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            draft_file: "survey.toml".to_string(),
            id_token: None,
            hover_dead_zone: DEFAULT_DEAD_ZONE,
            verbose_logging: false,
            dry_run: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，无法解析的值回退到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            api_base_url: lookup("SURVEY_API_URL").unwrap_or(default.api_base_url),
            draft_file: lookup("SURVEY_DRAFT_FILE").unwrap_or(default.draft_file),
            id_token: lookup("SURVEY_ID_TOKEN").filter(|v| !v.trim().is_empty()),
            hover_dead_zone: lookup("HOVER_DEAD_ZONE").and_then(|v| v.parse().ok()).unwrap_or(default.hover_dead_zone),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            dry_run: lookup("DRY_RUN").and_then(|v| v.parse().ok()).unwrap_or(default.dry_run),
        }
    }
}
