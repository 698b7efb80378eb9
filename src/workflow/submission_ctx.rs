//! 提交上下文
//!
//! 封装"这是第几次提交、提交了什么"这一信息，只用于日志

use crate::models::FormInput;
use std::fmt::Display;

/// 提交上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 提交序号（从1开始，进程内递增）
    pub seq: u64,

    /// 作文词数
    pub word_count: usize,

    /// 是否带图片
    pub has_image: bool,
}

impl SubmissionCtx {
    pub fn new(seq: u64, form: &FormInput) -> Self {
        Self {
            seq,
            word_count: form.word_count(),
            has_image: form.has_attachment(),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[提交 #{}]", self.seq)
    }
}
