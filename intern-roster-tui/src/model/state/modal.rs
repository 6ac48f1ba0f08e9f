//! 弹窗/对话框状态

use intern_roster_core::Intern;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 确认删除
    ConfirmDelete {
        /// 待删除的候选记录
        intern: Intern,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// Coffee Roulette 空花名册提示
    EmptyRoster {
        /// 焦点：0=关闭, 1=去新建
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗（候选记录随弹窗一起暂存）
    pub fn show_confirm_delete(&mut self, intern: Intern) {
        self.active = Some(Modal::ConfirmDelete { intern, focus: 0 });
    }

    /// 显示空花名册弹窗
    pub fn show_empty_roster(&mut self) {
        self.active = Some(Modal::EmptyRoster { focus: 0 });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 在弹窗按钮间切换焦点
    pub fn toggle_focus(&mut self) {
        match &mut self.active {
            Some(Modal::ConfirmDelete { focus, .. }) | Some(Modal::EmptyRoster { focus }) => {
                *focus = 1 - *focus;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intern() -> Intern {
        Intern {
            id: Some(5),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn confirm_delete_stages_the_candidate() {
        let mut modal = ModalState::new();
        modal.show_confirm_delete(intern());

        assert!(modal.is_open());
        assert!(matches!(
            &modal.active,
            Some(Modal::ConfirmDelete { intern, focus: 0 }) if intern.id == Some(5)
        ));

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn toggle_focus_flips_between_buttons() {
        let mut modal = ModalState::new();
        modal.show_empty_roster();

        modal.toggle_focus();
        assert!(matches!(&modal.active, Some(Modal::EmptyRoster { focus: 1 })));
        modal.toggle_focus();
        assert!(matches!(&modal.active, Some(Modal::EmptyRoster { focus: 0 })));
    }

    #[test]
    fn toggle_focus_ignores_the_help_modal() {
        let mut modal = ModalState::new();
        modal.show_help();
        modal.toggle_focus();
        assert!(matches!(&modal.active, Some(Modal::Help)));
    }
}
