//! 表单页视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormField};
use crate::view::theme::colors;

/// 渲染表单页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut lines = Vec::new();

    // 标题
    let title = if app.form.editing {
        "Edit Intern"
    } else {
        "New Intern"
    };
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {title}"),
        Style::default().fg(c.fg).add_modifier(ratatui::style::Modifier::BOLD),
    ));
    lines.push(Line::from(""));

    // 三个输入字段
    for field in [FormField::Name, FormField::Email, FormField::Department] {
        render_field(app, field, &mut lines);
    }

    // 操作提示
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Save | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染单个输入字段（标签 + 值 + 行内错误）
fn render_field(app: &App, field: FormField, lines: &mut Vec<Line<'_>>) {
    let c = colors();
    let focused = app.form.focused_field() == field;
    let value = app.form.value(field);

    // 标签
    lines.push(Line::from(Span::styled(
        format!("  {}", field.label()),
        Style::default().fg(Color::Gray),
    )));

    // 值（焦点字段带光标）
    let value_display = if focused {
        format!("  {value}▎")
    } else {
        format!("  {value}")
    };
    let value_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::styled(value_display, value_style));

    // 行内错误（来自远端校验）
    if let Some(message) = app.form.error(field) {
        lines.push(Line::styled(
            format!("  ⚠ {message}"),
            Style::default().fg(c.error),
        ));
    }

    lines.push(Line::from(""));
}
