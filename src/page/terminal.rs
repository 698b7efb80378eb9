use super::Page;
use std::io::Write;

/// 终端页面
///
/// 结果区写到标准输出，提示写到标准错误
#[derive(Debug, Default)]
pub struct TerminalPage;

impl TerminalPage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for TerminalPage {
    fn set_summary(&self, text: &str) {
        println!("{}", text);
    }

    fn set_grade(&self, text: &str) {
        println!("{}", text);
    }

    fn alert(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "⚠️  {}", message);
    }

    fn navigate(&self, url: &str) {
        println!("→ {}", url);
    }
}
