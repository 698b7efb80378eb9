//! # Essay Submit
//!
//! 作文评分表单的提交控制器：校验表单、发送一次请求、渲染结果或跳转
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP Client），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 post() 能力，实现 `Transport`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次提交
//! - `Validator` - 词数 / 上下文校验
//! - `PayloadBuilder` - JSON / multipart 请求体
//! - `response_parser` - 跳转 / 评分结果 / 服务端错误 归类
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整处理流程
//! - `SubmissionCtx` - 上下文封装（提交序号）
//! - `SubmissionFlow` - 流程编排（validate → build → post → render）
//!
//! ### ④ 页面（Page）
//! - `page/` - 流程能产生的副作用：摘要区、成绩区、提示、跳转
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod messages;
pub mod models;
pub mod page;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::{Config, Endpoint, PayloadFormat};
pub use error::{AppError, AppResult};
pub use infrastructure::{HttpExecutor, Transport};
pub use messages::Locale;
pub use models::{Attachment, FormInput, ServerResponse, SubmissionPayload};
pub use page::{Page, RecordingPage, TerminalPage};
pub use workflow::{SubmissionFlow, SubmitOutcome};
