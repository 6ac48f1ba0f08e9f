//! 列表页消息
//!
//! 处理花名册列表上的操作：选择、增删改、Roulette 抽取

/// 列表页消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 新建实习生（进入表单）
    Add,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项（先弹确认框）
    Delete,

    // ========== Coffee Roulette ==========
    /// 抽取一名实习生
    Roulette,
}
