use anyhow::Result;
use essay_submit::utils::logging;
use essay_submit::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _outcome = App::initialize(config)?.run().await?;

    Ok(())
}
