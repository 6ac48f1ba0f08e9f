//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, ModalMessage};
use crate::model::{App, View};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局强制退出（无论弹窗与否）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 根据当前视图处理按键
    match app.view {
        View::List => handle_list_keys(key),
        View::Form => handle_form_keys(key),
    }
}

/// 处理弹窗内的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Esc: 关闭弹窗（取消删除 / 关闭提示）
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),

        // Tab 或 ←→: 在按钮间切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleFocus)
        }

        // Enter: 确认当前按钮
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理列表视图的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    // 操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ROULETTE.matches(&key) {
        return AppMessage::Content(ContentMessage::Roulette);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),

        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),

        // Enter: 编辑选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理表单视图的按键
///
/// 可打印字符属于焦点字段，所以这里没有单键快捷键。
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    // Esc: 放弃并返回列表（当前行为：无未保存提示）
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    match key.code {
        // Tab 或 ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab 或 ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // Enter: 提交
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 可打印字符输入
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    #[test]
    fn typing_q_in_the_form_is_input_not_quit() {
        let mut app = App::new();
        app.view = View::Form;

        let msg = handle_key_event(press(KeyCode::Char('q')), &app);
        assert!(matches!(msg, AppMessage::Form(FormMessage::Input('q'))));
    }

    #[test]
    fn q_on_the_list_quits() {
        let app = App::new();
        let msg = handle_key_event(press(KeyCode::Char('q')), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn modal_captures_input_when_open() {
        let mut app = App::new();
        app.modal.show_empty_roster();

        let msg = handle_key_event(press(KeyCode::Enter), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Confirm)));

        let msg = handle_key_event(press(KeyCode::Esc), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn alt_shortcuts_map_to_list_actions() {
        let app = App::new();
        assert!(matches!(
            handle_key_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_key_event(alt('c'), &app),
            AppMessage::Content(ContentMessage::Roulette)
        ));
        assert!(matches!(
            handle_key_event(alt('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
    }

    #[test]
    fn ctrl_c_quits_even_with_a_modal_open() {
        let mut app = App::new();
        app.modal.show_help();

        let msg = handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &app,
        );
        assert!(matches!(msg, AppMessage::Quit));
    }
}
