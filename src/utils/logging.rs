/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::app::SaveStats;
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 设置了 `RUST_LOG` 时以其为准，否则按 `verbose` 选择 debug / info 级别。
/// 重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 问卷设计器启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 保存接口: {}", config.api_base_url);
    info!("📁 草稿路径: {}", config.draft_file);
    info!(
        "🔑 身份令牌: {}",
        if config.id_token.is_some() { "已配置" } else { "未配置" }
    );
    info!("{}", "=".repeat(60));
}

/// 打印保存统计信息
pub fn log_save_result(stats: &SaveStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 保存完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", stats.saved, stats.total);
    info!("⏭️ 跳过: {}", stats.skipped);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
