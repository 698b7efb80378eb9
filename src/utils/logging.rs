//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use crate::config::Config;
use crate::workflow::SubmitOutcome;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 info，详细模式下为 debug
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "essay_submit=debug"
    } else {
        "essay_submit=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, target: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 作文提交 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 目标: {}", target);
    info!(
        "📋 请求体格式: {:?} | 最少词数: {} | 图片跳过校验: {}",
        config.payload_format, config.min_word_count, config.bypass_validation_on_attachment
    );
    info!("{}", "=".repeat(60));
}

/// 记录一次提交的最终结果
pub fn log_outcome(outcome: &SubmitOutcome) {
    info!("\n{}", "─".repeat(60));
    match outcome {
        SubmitOutcome::Rendered {
            summary_text,
            grade_text,
        } => {
            info!("✅ {}", grade_text);
            info!("📝 {}", truncate_text(summary_text, 80));
        }
        SubmitOutcome::Navigated { location } => info!("↪️ 已跳转: {}", location),
        SubmitOutcome::Blocked(err) => warn!("⛔ 未提交: {}", err),
        SubmitOutcome::Rejected { error } => warn!("❌ 服务端拒绝: {}", error),
        SubmitOutcome::Failed { reason } => warn!("❌ 提交失败: {}", reason),
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
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
