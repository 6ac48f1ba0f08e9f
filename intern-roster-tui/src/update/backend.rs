//! 后台结果更新逻辑

use crate::message::BackendMessage;
use crate::model::{App, View};

use super::Action;

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) -> Vec<Action> {
    match msg {
        BackendMessage::RosterLoaded(interns) => {
            // 缓存整体替换，不做合并
            app.roster.set_interns(interns);
            app.clear_status();
            Vec::new()
        }

        BackendMessage::RosterLoadFailed(detail) => {
            // 拉取失败：旧缓存保持不动
            log::warn!("Error fetching interns: {detail}");
            app.roster.loading = false;
            app.roster.error = Some(detail.clone());
            app.set_status(format!("Load failed: {detail}"));
            Vec::new()
        }

        BackendMessage::SaveCompleted => {
            // 保存成功：刷新并回到列表
            app.switch_view(View::List);
            app.set_status("Saved");
            vec![Action::LoadRoster]
        }

        BackendMessage::SaveRejected(errors) => {
            // 校验被拒：错误逐字段显示，视图和缓存都不动
            app.form.errors = errors;
            Vec::new()
        }

        BackendMessage::SaveFailed(detail) => {
            // 传输失败：停在表单，不产生字段错误
            log::warn!("Error saving intern: {detail}");
            app.set_status(format!("Save failed: {detail}"));
            Vec::new()
        }

        BackendMessage::DeleteFinished { error } => {
            // 无论成败：关闭确认框并刷新
            app.modal.close();
            match error {
                Some(detail) => {
                    log::warn!("Error deleting intern: {detail}");
                    app.set_status(format!("Delete failed: {detail}"));
                }
                None => app.set_status("Deleted"),
            }
            vec![Action::LoadRoster]
        }
    }
}
