//! 花名册后台服务
//!
//! 封装 intern-roster-core 的服务，提供给派发层的 tokio 任务调用。

use std::sync::Arc;

use intern_roster_core::{CoreResult, Intern, InternApi, InternDraft, RosterService};

/// TUI 后台服务
pub struct RosterBackend {
    roster: RosterService,
}

impl RosterBackend {
    /// 创建后台服务实例
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let api = Arc::new(InternApi::new(base_url));
        Self {
            roster: RosterService::new(api),
        }
    }

    /// 拉取完整花名册
    pub async fn load_all(&self) -> CoreResult<Vec<Intern>> {
        self.roster.load_all().await
    }

    /// 保存草稿
    ///
    /// 编辑模式且草稿带 id 时走更新；其余情况一律创建。
    pub async fn save(&self, draft: &InternDraft, editing: bool) -> CoreResult<()> {
        match (editing, draft.id) {
            (true, Some(id)) => {
                self.roster.update(id, draft).await?;
            }
            _ => {
                self.roster.create(draft).await?;
            }
        }
        Ok(())
    }

    /// 删除记录
    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        self.roster.delete(id).await
    }
}
