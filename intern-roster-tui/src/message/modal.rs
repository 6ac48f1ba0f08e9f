//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（取消删除 / 关闭空花名册提示）
    Close,

    /// 在弹窗按钮间切换焦点
    ToggleFocus,

    /// 确认当前焦点按钮
    Confirm,
}
