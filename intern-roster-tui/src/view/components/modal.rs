//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::EmptyRoster { .. } => render_empty_roster(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete { intern, focus } = modal else {
        return;
    };

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Are you sure to delete this intern ?",
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{}\"", intern.name),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled("[ Cancel ]", cancel_style),
            Span::raw("    "),
            Span::styled("[ Delete ]", confirm_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" Switch | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Confirm | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染 Coffee Roulette 空花名册弹窗
fn render_empty_roster(frame: &mut Frame, modal: &Modal) {
    let Modal::EmptyRoster { focus } = modal else {
        return;
    };

    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Coffee Roulette ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let close_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let add_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  No interns to pick from.",
            Style::default().fg(Color::White),
        ),
        Line::styled(
            "  Add your first intern to spin the roulette.",
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled("[ Close ]", close_style),
            Span::raw("    "),
            Span::styled("[ Add Intern ]", add_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(46, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let hints: &[(&str, &str)] = &[
        ("↑↓ / jk", "Select intern"),
        ("Enter / Alt+e", "Edit selected"),
        ("Alt+a", "Add intern"),
        ("Alt+d", "Delete selected"),
        ("Alt+c", "Coffee Roulette"),
        ("Alt+r", "Refresh roster"),
        ("Tab", "Next form field"),
        ("Esc", "Back / Close"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in hints {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
