//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod content;        // 列表页子消息
//!         mod form;           // 表单子消息
//!         mod modal;          // 弹窗子消息
//!         mod backend;        // 后台任务结果消息
//!
//! 两类来源：
//!     · Event 层翻译键盘输入产生的消息（Content / Form / Modal / ...）
//!     · Backend 层的 tokio 任务完成后经 mpsc 发回的消息（Backend）
//!
//! 两者走同一条 update 管道，主循环每轮先清空 mpsc 队列再轮询键盘。
//!

mod backend;
mod content;
mod form;
mod modal;

pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;

use crate::model::View;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换视图（进表单即创建模式）
    SwitchView(View),

    /// 列表页相关消息
    Content(ContentMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 重新拉取花名册
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
