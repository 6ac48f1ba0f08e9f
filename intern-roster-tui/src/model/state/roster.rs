//! 花名册列表状态

use intern_roster_core::Intern;

/// 花名册列表状态
#[derive(Debug, Default)]
pub struct RosterState {
    /// 实习生缓存（每次成功拉取后整体替换）
    pub interns: Vec<Intern>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次拉取失败的信息
    pub error: Option<String>,
}

impl RosterState {
    /// 创建新的花名册状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.interns.is_empty() && self.selected < self.interns.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.interns.is_empty() {
            self.selected = self.interns.len() - 1;
        }
    }

    /// 获取当前选中的实习生
    pub fn selected_intern(&self) -> Option<&Intern> {
        self.interns.get(self.selected)
    }

    /// 整体替换缓存
    ///
    /// 选中项夹到新列表范围内，避免删除后指向越界。
    pub fn set_interns(&mut self, interns: Vec<Intern>) {
        self.interns = interns;
        if self.selected >= self.interns.len() {
            self.selected = self.interns.len().saturating_sub(1);
        }
        self.loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intern(id: i64, name: &str) -> Intern {
        Intern {
            id: Some(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut roster = RosterState::new();
        roster.set_interns(vec![intern(1, "Ana"), intern(2, "Bo")]);

        roster.select_previous();
        assert_eq!(roster.selected, 0);

        roster.select_next();
        roster.select_next();
        assert_eq!(roster.selected, 1);

        roster.select_first();
        assert_eq!(roster.selected, 0);
        roster.select_last();
        assert_eq!(roster.selected, 1);
    }

    #[test]
    fn replacing_with_a_shorter_list_clamps_selection() {
        let mut roster = RosterState::new();
        roster.set_interns(vec![intern(1, "Ana"), intern(2, "Bo"), intern(3, "Cleo")]);
        roster.select_last();

        roster.set_interns(vec![intern(1, "Ana")]);
        assert_eq!(roster.selected, 0);
        assert_eq!(roster.selected_intern().map(|i| i.id), Some(Some(1)));
    }

    #[test]
    fn set_interns_clears_loading_and_error() {
        let mut roster = RosterState::new();
        roster.loading = true;
        roster.error = Some("boom".to_string());

        roster.set_interns(Vec::new());
        assert!(!roster.loading);
        assert!(roster.error.is_none());
        assert!(roster.selected_intern().is_none());
    }
}
