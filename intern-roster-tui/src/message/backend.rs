//! 后台任务结果消息

use intern_roster_core::{FieldErrors, Intern};

/// 后台任务完成消息
///
/// 由 backend 层的 tokio 任务发回主循环。
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 花名册拉取成功（缓存整体替换）
    RosterLoaded(Vec<Intern>),

    /// 花名册拉取失败（旧缓存保持不动）
    RosterLoadFailed(String),

    /// 保存成功
    SaveCompleted,

    /// 远端校验拒绝（逐字段消息）
    SaveRejected(FieldErrors),

    /// 保存时传输失败
    SaveFailed(String),

    /// 删除请求已结束
    ///
    /// 无论成败都会触发刷新并关闭确认弹窗；失败信息只用于提示。
    DeleteFinished {
        /// 删除失败时的错误信息
        error: Option<String>,
    },
}
