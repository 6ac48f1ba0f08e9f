//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 与远端的交互不在这里发生：需要发请求时返回一个 [`Action`]，
//! 由主循环交给 Backend 层在 tokio 任务里执行，结果再以
//! `AppMessage::Backend(..)` 回到这条管道。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 列表页子消息处理
//!         mod form;           // 表单子消息处理
//!         mod modal;          // 弹窗子消息处理
//!         mod backend;        // 后台结果处理
//!         pub mod actions;    // Action 定义
//!
//!
//! 视图状态机：
//!     List --(Content::Add / SwitchView(Form))--> Form[创建]
//!     List --(Content::Edit)------------------->  Form[编辑]
//!     Form --(保存成功)------------------------->  List
//!     Form --(Form::Cancel / SwitchView(List))-->  List   // 不保存，无提示
//!

pub mod actions;

mod backend;
mod content;
mod form;
mod modal;


pub use actions::Action;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态，返回需要执行的后台动作
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Action> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::SwitchView(target) => {
            app.switch_view(target);
            Vec::new()
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Refresh => {
            app.roster.loading = true;
            app.set_status("Refreshing...");
            vec![Action::LoadRoster]
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            Vec::new()
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}
