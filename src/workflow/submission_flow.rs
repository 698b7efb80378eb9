//! 提交处理流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验表单（失败 → 提示，不发请求）
//! 2. 构建请求体 → POST 到配置的端点
//! 3. 跳转 → 页面跳转；服务端错误 → 提示；评分结果 → 写入摘要与成绩
//! 4. 网络或解析失败 → 通用提示（兜底）

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{AppResult, ValidationError};
use crate::infrastructure::Transport;
use crate::messages::Messages;
use crate::models::{FormInput, ServerResponse};
use crate::page::Page;
use crate::services::{response_parser, PayloadBuilder, Validator};
use crate::utils::logging::truncate_text;
use crate::workflow::submission_ctx::SubmissionCtx;

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 校验未通过，未发请求
    Blocked(ValidationError),
    /// 页面已跳转
    Navigated { location: String },
    /// 摘要与成绩已写入页面
    Rendered {
        summary_text: String,
        grade_text: String,
    },
    /// 服务端返回错误
    Rejected { error: String },
    /// 网络或响应解析失败
    Failed { reason: String },
}

/// 提交处理流程
///
/// - 编排 校验 → 构建 → 发送 → 渲染 的完整流程
/// - 每次提交最多发一个请求，不重试
/// - 不阻止重叠提交，页面内容后写入者覆盖
/// - 任何错误都不会从 `submit` 传出
pub struct SubmissionFlow<T: Transport, P: Page> {
    endpoint: &'static str,
    validator: Validator,
    payload_builder: PayloadBuilder,
    messages: Messages,
    transport: T,
    page: P,
    next_seq: AtomicU64,
}

impl<T: Transport, P: Page> SubmissionFlow<T, P> {
    /// 创建新的提交流程
    pub fn new(config: &Config, transport: T, page: P) -> Self {
        Self {
            endpoint: config.endpoint.path(),
            validator: Validator::new(config),
            payload_builder: PayloadBuilder::new(config),
            messages: Messages::new(config.locale),
            transport,
            page,
            next_seq: AtomicU64::new(1),
        }
    }

    /// 获取页面的引用
    pub fn page(&self) -> &P {
        &self.page
    }

    /// 处理一次提交
    pub async fn submit(&self, form: FormInput) -> SubmitOutcome {
        let ctx = SubmissionCtx::new(self.next_seq.fetch_add(1, Ordering::Relaxed), &form);
        info!(
            "{} 📨 收到提交：{} 词，图片: {}",
            ctx,
            ctx.word_count,
            if ctx.has_image { "有" } else { "无" }
        );
        debug!("{} 作文预览: {}", ctx, truncate_text(&form.essay_text, 60));

        // ========== 1. 校验 ==========
        if let Err(err) = self.validator.validate(&form) {
            warn!("{} ⚠️ 校验未通过: {}", ctx, err);
            self.page.alert(&self.messages.validation(&err));
            return SubmitOutcome::Blocked(err);
        }

        // ========== 2. 发送 ==========
        let response = match self.dispatch(&ctx, form).await {
            Ok(response) => response,
            Err(e) => {
                error!("{} ❌ Error processing essay: {}", ctx, e);
                self.page.alert(&self.messages.transport_failure());
                return SubmitOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        // ========== 3. 处理响应 ==========
        match response {
            ServerResponse::Redirect { location } => {
                info!("{} ↪️ 跳转到 {}", ctx, location);
                self.page.navigate(&location);
                SubmitOutcome::Navigated { location }
            }
            ServerResponse::Rejected { error } => {
                warn!("{} ⚠️ 服务端返回错误: {}", ctx, error);
                self.page.alert(&self.messages.server_error(&error));
                SubmitOutcome::Rejected { error }
            }
            ServerResponse::Graded(reply) => {
                let summary_text = reply.summary_text();
                let grade_text = reply.grade_text();
                self.page.set_summary(&summary_text);
                self.page.set_grade(&grade_text);
                info!("{} ✓ 评分完成: {}", ctx, grade_text);
                SubmitOutcome::Rendered {
                    summary_text,
                    grade_text,
                }
            }
        }
    }

    /// 构建请求体、发送并解析响应
    async fn dispatch(&self, ctx: &SubmissionCtx, form: FormInput) -> AppResult<ServerResponse> {
        let payload = self.payload_builder.build(form);
        info!("{} 🚀 POST {} ({})", ctx, self.endpoint, payload.kind());

        let raw = self.transport.post(self.endpoint, payload).await?;
        debug!("{} 响应状态码: {}", ctx, raw.status);

        response_parser::interpret(&raw)
    }
}
