//! 表单更新逻辑

use crate::message::FormMessage;
use crate::model::{App, View};

use super::Action;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Vec<Action> {
    match msg {
        FormMessage::Input(c) => {
            app.form.input(c);
            Vec::new()
        }

        FormMessage::Backspace => {
            app.form.backspace();
            Vec::new()
        }

        FormMessage::NextField => {
            app.form.next_field();
            Vec::new()
        }

        FormMessage::PrevField => {
            app.form.prev_field();
            Vec::new()
        }

        FormMessage::Submit => {
            // 提交前总是先清掉上一轮的校验错误
            app.form.errors.clear();

            let draft = app.form.draft.clone();
            let editing = app.form.editing;
            app.set_status(if editing { "Updating..." } else { "Saving..." });

            vec![Action::SaveDraft { draft, editing }]
        }

        FormMessage::Cancel => {
            // 放弃草稿直接回列表（当前行为：无未保存提示）
            app.switch_view(View::List);
            Vec::new()
        }
    }
}
