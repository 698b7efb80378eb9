use crate::config::Config;
use crate::infrastructure::HttpExecutor;
use crate::models::load_form_from_toml;
use crate::page::TerminalPage;
use crate::utils::logging::{log_outcome, log_startup};
use crate::workflow::{SubmissionFlow, SubmitOutcome};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    target: String,
    flow: SubmissionFlow<HttpExecutor, TerminalPage>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let executor = HttpExecutor::new(&config).context("无法创建 HTTP 客户端")?;
        let target = executor
            .endpoint_url(config.endpoint.path())
            .context("无法拼接提交地址")?
            .to_string();
        log_startup(&config, &target);

        let flow = SubmissionFlow::new(&config, executor, TerminalPage::new());

        Ok(Self {
            config,
            target,
            flow,
        })
    }

    /// 实际提交地址
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 运行应用主逻辑：读取表单并提交一次
    pub async fn run(&self) -> Result<SubmitOutcome> {
        info!("\n📁 正在读取表单: {}", self.config.form_file);
        let form = load_form_from_toml(Path::new(&self.config.form_file))
            .await
            .with_context(|| format!("无法加载表单: {}", self.config.form_file))?;

        let outcome = self.flow.submit(form).await;
        log_outcome(&outcome);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    #[test]
    fn test_target_matches_request_url() {
        let config = Config {
            base_url: "http://grader.local:5000/app/".to_string(),
            endpoint: Endpoint::SetCriteria,
            ..Default::default()
        };
        let app = App::initialize(config).unwrap();
        assert_eq!(app.target(), "http://grader.local:5000/set_criteria");
    }
}
