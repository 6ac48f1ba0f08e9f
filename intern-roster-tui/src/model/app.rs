//! 应用主状态结构

use intern_roster_core::{RandomSource, RouletteService, ThreadRngSource};

use super::{FormState, ModalState, RosterState, RouletteState, View};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前视图
    pub view: View,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各区域状态 ===
    /// 花名册列表状态
    pub roster: RosterState,
    /// 表单状态
    pub form: FormState,
    /// Coffee Roulette 状态
    pub roulette: RouletteState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 抽取服务（随机源可注入，测试时换成确定性实现）
    pub roulette_service: RouletteService,
}

impl App {
    /// 创建新的应用实例（生产随机源）
    pub fn new() -> Self {
        Self::with_random_source(Box::new(ThreadRngSource))
    }

    /// 用指定随机源创建应用实例（测试时注入确定性随机源）
    pub fn with_random_source(source: Box<dyn RandomSource>) -> Self {
        let roulette_service = RouletteService::new(source);
        Self {
            should_quit: false,
            view: View::List,
            status_message: None,
            roster: RosterState::new(),
            form: FormState::default(),
            roulette: RouletteState::new(),
            modal: ModalState::new(),
            roulette_service,
        }
    }

    /// 切换视图
    ///
    /// 总是清除 Roulette 结果；进入表单时重置草稿、回到创建模式并清空错误。
    /// 进入列表除视图标志和 Roulette 重置外没有其它副作用。
    pub fn switch_view(&mut self, target: View) {
        self.view = target;
        self.roulette.clear();

        if target == View::Form {
            self.form.reset_for_create();
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
