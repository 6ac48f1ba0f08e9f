//! 表单状态

use intern_roster_core::{FieldErrors, Intern, InternDraft};

/// 表单字段（焦点顺序即枚举顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Department,
}

impl FormField {
    /// 字段总数
    pub const COUNT: usize = 3;

    /// 按焦点索引取字段
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Name,
            1 => Self::Email,
            _ => Self::Department,
        }
    }

    /// 显示标签
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
        }
    }
}

/// 表单状态
///
/// 创建与编辑共用同一份草稿；`editing == false` 即创建模式。
/// 编辑过程中只改草稿，列表缓存要等远端写入成功后的刷新才会变。
#[derive(Debug, Default)]
pub struct FormState {
    /// 工作草稿
    pub draft: InternDraft,
    /// 远端校验错误（逐字段）
    pub errors: FieldErrors,
    /// 是否处于编辑模式
    pub editing: bool,
    /// 当前焦点字段索引
    pub focus: usize,
}

impl FormState {
    /// 进入创建模式
    ///
    /// 草稿与错误总是一起重置。
    pub fn reset_for_create(&mut self) {
        self.draft = InternDraft::default();
        self.errors.clear();
        self.editing = false;
        self.focus = 0;
    }

    /// 用已有记录填充草稿（逐字段拷贝），进入编辑模式
    pub fn seed_from(&mut self, intern: &Intern) {
        self.draft = InternDraft::from_intern(intern);
        self.errors.clear();
        self.editing = true;
        self.focus = 0;
    }

    /// 当前焦点字段
    pub fn focused_field(&self) -> FormField {
        FormField::from_index(self.focus)
    }

    /// 下一个字段
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FormField::COUNT;
    }

    /// 上一个字段
    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FormField::COUNT - 1) % FormField::COUNT;
    }

    /// 字段取值（渲染用）
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Email => &self.draft.email,
            FormField::Department => &self.draft.department,
        }
    }

    /// 字段错误（渲染用）
    pub fn error(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.errors.name.as_deref(),
            FormField::Email => self.errors.email.as_deref(),
            FormField::Department => self.errors.department.as_deref(),
        }
    }

    /// 向焦点字段输入一个字符
    pub fn input(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    /// 从焦点字段删除一个字符
    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field() {
            FormField::Name => &mut self.draft.name,
            FormField::Email => &mut self.draft.email,
            FormField::Department => &mut self.draft.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_for_create_clears_draft_and_errors_together() {
        let mut form = FormState::default();
        form.draft.name = "left over".to_string();
        form.errors.email = Some("Email already exists".to_string());
        form.editing = true;
        form.focus = 2;

        form.reset_for_create();

        assert_eq!(form.draft, InternDraft::default());
        assert!(form.errors.is_empty());
        assert!(!form.editing);
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn seed_from_copies_the_record_and_enters_edit_mode() {
        let intern = Intern {
            id: Some(9),
            name: "Dana Whitfield".to_string(),
            email: "dana@example.com".to_string(),
            department: "Marketing".to_string(),
        };
        let mut form = FormState::default();
        form.errors.name = Some("stale".to_string());

        form.seed_from(&intern);

        assert_eq!(form.draft, InternDraft::from_intern(&intern));
        assert!(form.editing);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn editing_the_draft_never_touches_the_source_record() {
        let intern = Intern {
            id: Some(9),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            department: "Marketing".to_string(),
        };
        let mut form = FormState::default();
        form.seed_from(&intern);
        form.input('!');

        assert_eq!(intern.name, "Dana");
        assert_eq!(form.draft.name, "Dana!");
    }

    #[test]
    fn field_focus_wraps_both_ways() {
        let mut form = FormState::default();
        assert_eq!(form.focused_field(), FormField::Name);

        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field(), FormField::Department);
        form.next_field();
        assert_eq!(form.focused_field(), FormField::Name);

        form.prev_field();
        assert_eq!(form.focused_field(), FormField::Department);
    }

    #[test]
    fn input_goes_to_the_focused_field() {
        let mut form = FormState::default();
        form.input('a');
        form.next_field();
        form.input('b');
        form.backspace();
        form.input('c');

        assert_eq!(form.draft.name, "a");
        assert_eq!(form.draft.email, "c");
        assert_eq!(form.draft.department, "");
    }
}
