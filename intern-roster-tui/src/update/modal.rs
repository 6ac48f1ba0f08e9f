//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::{App, Modal, View};

use super::Action;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Action> {
    match msg {
        ModalMessage::Close => {
            // 取消删除 / 关闭空花名册提示：只收回弹窗，不发请求
            app.modal.close();
            Vec::new()
        }

        ModalMessage::ToggleFocus => {
            app.modal.toggle_focus();
            Vec::new()
        }

        ModalMessage::Confirm => handle_confirm(app),
    }
}

/// 确认当前焦点按钮
fn handle_confirm(app: &mut App) -> Vec<Action> {
    match app.modal.active.clone() {
        Some(Modal::ConfirmDelete { intern, focus }) => {
            if focus != 1 {
                // 焦点在取消按钮上
                app.modal.close();
                return Vec::new();
            }

            match intern.id {
                Some(id) => {
                    // 弹窗保持打开，等 DeleteFinished 统一收尾
                    app.set_status(format!("Deleting {}...", intern.name));
                    vec![Action::DeleteIntern { id }]
                }
                None => {
                    // 还没持久化的候选无从删除
                    app.modal.close();
                    Vec::new()
                }
            }
        }

        Some(Modal::EmptyRoster { focus }) => {
            app.modal.close();
            if focus == 1 {
                // 从空花名册提示直达新建表单
                app.switch_view(View::Form);
            }
            Vec::new()
        }

        Some(Modal::Help) | None => {
            app.modal.close();
            Vec::new()
        }
    }
}
