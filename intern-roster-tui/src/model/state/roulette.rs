//! Coffee Roulette 状态

use intern_roster_core::Intern;

/// Coffee Roulette 状态
#[derive(Debug, Default)]
pub struct RouletteState {
    /// 当前抽中的实习生
    pub lucky: Option<Intern>,
}

impl RouletteState {
    /// 创建新的 Roulette 状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 清除抽取结果（切换视图时调用）
    pub fn clear(&mut self) {
        self.lucky = None;
    }
}
