//! 表单消息

/// 表单相关消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 提交（创建或更新由编辑标志决定）
    Submit,

    /// 放弃并返回列表（不保存，无未保存提示）
    Cancel,
}
