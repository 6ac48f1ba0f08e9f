//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，通过 intern-roster-core 访问远端花名册。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config;             // 配置加载（JSON 文件）
//!         mod roster;             // 花名册后台服务
//!         mod dispatch;           // Action → tokio 任务派发
//!
//!
//! 数据流：
//!     Update 层返回 Action
//!         ↓
//!     dispatch() 为每个 Action 启动一个 tokio 任务
//!         ↓
//!     任务调用 RosterBackend（→ intern-roster-core → 远端 API）
//!         ↓
//!     结果以 AppMessage::Backend(..) 经 mpsc 发回主循环
//!         ↓
//!     Update 层消费结果，View 层下一轮重绘
//!

mod config;
mod dispatch;
mod roster;

pub use config::{load_config, log_dir, AppConfig, DEFAULT_API_BASE_URL};
pub use dispatch::dispatch;
pub use roster::RosterBackend;
