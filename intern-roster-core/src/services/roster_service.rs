//! 花名册同步服务

use std::sync::Arc;

use intern_roster_client::{Intern, InternApi, InternDraft};

use crate::error::CoreResult;

/// 实习生花名册服务
///
/// 封装 [`InternApi`]，把远端操作映射到核心层错误类型。
/// 缓存由调用方持有：每次 `load_all` 成功后整体替换，失败时不动旧缓存。
pub struct RosterService {
    api: Arc<InternApi>,
}

impl RosterService {
    /// 创建花名册服务实例
    #[must_use]
    pub fn new(api: Arc<InternApi>) -> Self {
        Self { api }
    }

    /// 拉取完整花名册
    ///
    /// 返回的顺序与远端一致，不做任何排序或变换。
    pub async fn load_all(&self) -> CoreResult<Vec<Intern>> {
        Ok(self.api.list_interns().await?)
    }

    /// 创建新记录
    pub async fn create(&self, draft: &InternDraft) -> CoreResult<Intern> {
        Ok(self.api.create_intern(draft).await?)
    }

    /// 更新 `id` 对应的记录
    pub async fn update(&self, id: i64, draft: &InternDraft) -> CoreResult<Intern> {
        Ok(self.api.update_intern(id, draft).await?)
    }

    /// 删除 `id` 对应的记录
    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        Ok(self.api.delete_intern(id).await?)
    }
}
