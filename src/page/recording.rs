use super::Page;
use std::sync::{Mutex, MutexGuard};

/// 页面状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub summary: Option<String>,
    pub grade: Option<String>,
    pub alerts: Vec<String>,
    pub navigations: Vec<String>,
}

/// 内存页面，记录控制器产生的所有副作用
#[derive(Debug, Default)]
pub struct RecordingPage {
    state: Mutex<PageSnapshot>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前状态的拷贝
    pub fn snapshot(&self) -> PageSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageSnapshot> {
        // 页面状态没有跨字段约束，中毒后继续使用即可
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Page for RecordingPage {
    fn set_summary(&self, text: &str) {
        self.lock().summary = Some(text.to_string());
    }

    fn set_grade(&self, text: &str) {
        self.lock().grade = Some(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn navigate(&self, url: &str) {
        self.lock().navigations.push(url.to_string());
    }
}
