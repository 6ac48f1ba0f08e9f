//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 内容区 + 状态栏）
//!         mod pages;          // 列表页 / 表单页
//!         mod components;     // 弹窗、状态栏组件
//!         pub mod theme;      // 主题和样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
