//! 视图状态定义

/// 视图枚举
///
/// 对应界面上唯一激活的区域；不做持久化，重启后回到列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// 花名册列表
    #[default]
    List,
    /// 新建/编辑表单
    Form,
}

impl View {
    /// 获取视图标题
    pub fn title(self) -> &'static str {
        match self {
            View::List => "Roster",
            View::Form => "Intern Form",
        }
    }
}
