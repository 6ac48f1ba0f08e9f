//! 列表页更新逻辑

use crate::message::ContentMessage;
use crate::model::{App, View};

use super::Action;

/// 处理列表页消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Action> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.roster.select_previous();
            Vec::new()
        }
        ContentMessage::SelectNext => {
            app.roster.select_next();
            Vec::new()
        }
        ContentMessage::SelectFirst => {
            app.roster.select_first();
            Vec::new()
        }
        ContentMessage::SelectLast => {
            app.roster.select_last();
            Vec::new()
        }

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            app.switch_view(View::Form);
            Vec::new()
        }
        ContentMessage::Edit => {
            handle_edit(app);
            Vec::new()
        }
        ContentMessage::Delete => {
            handle_delete(app);
            Vec::new()
        }

        // ========== Coffee Roulette ==========
        ContentMessage::Roulette => {
            handle_roulette(app);
            Vec::new()
        }
    }
}

/// 编辑当前选中项
///
/// 直接置视图而不走 `switch_view`：进入编辑不重置草稿，
/// 也不清除 Roulette 结果（与创建入口不同）。
fn handle_edit(app: &mut App) {
    if let Some(intern) = app.roster.selected_intern().cloned() {
        app.form.seed_from(&intern);
        app.view = View::Form;
    }
}

/// 删除当前选中项：先暂存候选并弹确认框，确认前不发请求
fn handle_delete(app: &mut App) {
    if let Some(intern) = app.roster.selected_intern().cloned() {
        app.modal.show_confirm_delete(intern);
    }
}

/// Coffee Roulette 抽取
///
/// 空花名册弹专用提示框；否则每次调用都做一次新的均匀抽取，
/// 重复抽到同一个人是允许的。
fn handle_roulette(app: &mut App) {
    let picked = app
        .roulette_service
        .pick(&app.roster.interns)
        .ok()
        .cloned();

    match picked {
        Some(intern) => {
            app.roulette.lucky = Some(intern);
        }
        None => {
            app.modal.show_empty_roster();
        }
    }
}
