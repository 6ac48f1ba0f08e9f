//! Update 层产生的副作用动作

use intern_roster_core::InternDraft;

/// 需要在后台执行的远端操作
///
/// Update 层只改状态；动作由主循环交给 Backend 层执行。
/// 动作一经派发不可取消，也不做去重：两次快速提交就是两个
/// 独立竞争的请求，结果顺序由远端和网络决定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 拉取完整花名册
    LoadRoster,

    /// 保存草稿（编辑模式走 PUT，否则 POST）
    SaveDraft {
        /// 提交的草稿快照
        draft: InternDraft,
        /// 是否处于编辑模式
        editing: bool,
    },

    /// 删除记录
    DeleteIntern {
        /// 暂存候选的记录 id
        id: i64,
    },
}
