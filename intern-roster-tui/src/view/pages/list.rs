//! 花名册列表页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染花名册列表页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 拉取失败的提示占顶部一行（旧缓存仍照常显示）
    let (banner_area, rest_area) = if app.roster.error.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    // Roulette 结果占用底部一条面板
    let (list_area, roulette_area) = if app.roulette.lucky.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(rest_area);
        (chunks[0], Some(chunks[1]))
    } else {
        (rest_area, None)
    };

    if let Some(banner_area) = banner_area {
        render_error_banner(app, frame, banner_area);
    }

    if app.roster.interns.is_empty() {
        render_empty(app, frame, list_area);
    } else {
        render_list(app, frame, list_area);
    }

    if let Some(roulette_area) = roulette_area {
        render_roulette(app, frame, roulette_area);
    }
}

/// 渲染拉取失败提示
fn render_error_banner(app: &App, frame: &mut Frame, area: Rect) {
    let Some(ref detail) = app.roster.error else {
        return;
    };

    let c = colors();
    let line = Line::styled(
        format!("  ⚠ Refresh failed: {detail}"),
        Style::default().fg(c.error),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let first_line = if app.roster.loading {
        "  Loading interns..."
    } else {
        "  No interns on the roster yet"
    };

    let content = vec![
        Line::from(""),
        Line::styled(first_line, Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Alt+a: Add intern", Style::default().fg(Color::DarkGray)),
        Line::styled(
            "  Alt+c: Coffee Roulette",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

/// 渲染实习生列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let items: Vec<ListItem> = app
        .roster
        .interns
        .iter()
        .enumerate()
        .map(|(i, intern)| {
            let is_selected = i == app.roster.selected;
            let department_badge = format!("[{}]", intern.department);

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let detail_style = if is_selected {
                Style::default().bg(c.selected_bg).fg(c.selected_fg)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(&intern.name, style),
                Span::raw(" "),
                Span::styled(&intern.email, detail_style),
                Span::raw(" "),
                Span::styled(department_badge, detail_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.roster.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 渲染 Coffee Roulette 结果面板
fn render_roulette(app: &App, frame: &mut Frame, area: Rect) {
    let Some(ref lucky) = app.roulette.lucky else {
        return;
    };

    let block = Block::default()
        .title(" Coffee Roulette ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(" ☕ ", Style::default().fg(Color::Yellow)),
        Span::styled(&lucky.name, Styles::title()),
        Span::styled(
            format!("  {} · {}", lucky.department, lucky.email),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}
