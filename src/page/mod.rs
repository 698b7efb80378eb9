//! 页面抽象
//!
//! 控制器能产生的全部副作用：写摘要区、写成绩区、弹出阻塞提示、跳转

pub mod recording;
pub mod terminal;

pub use recording::{PageSnapshot, RecordingPage};
pub use terminal::TerminalPage;

use std::sync::Arc;

/// 页面能力
///
/// 所有方法取 `&self`，重叠的提交共享同一个页面，后写入者覆盖先写入者
pub trait Page: Send + Sync {
    /// 写入摘要区域
    fn set_summary(&self, text: &str);

    /// 写入成绩区域
    fn set_grade(&self, text: &str);

    /// 阻塞提示
    fn alert(&self, message: &str);

    /// 跳转到新地址
    fn navigate(&self, url: &str);
}

impl<P: Page + ?Sized> Page for Arc<P> {
    fn set_summary(&self, text: &str) {
        (**self).set_summary(text)
    }

    fn set_grade(&self, text: &str) {
        (**self).set_grade(text)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn navigate(&self, url: &str) {
        (**self).navigate(url)
    }
}
