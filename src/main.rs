use anyhow::Result;
use survey_designer::utils::logging;
use survey_designer::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let stats = App::initialize(config).run().await?;

    if stats.failed > 0 {
        anyhow::bail!("{} 份问卷保存失败", stats.failed);
    }

    Ok(())
}
