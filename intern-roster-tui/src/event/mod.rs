//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//! 分发优先级：弹窗打开时弹窗独占输入；否则按当前视图分发，
//! 表单视图把可打印字符交给焦点字段，列表视图用单键快捷键。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
