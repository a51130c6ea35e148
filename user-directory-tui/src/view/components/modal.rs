//! 弹窗组件
//!
//! 详情弹窗是一个独立的带边框容器，盖在列表之上；
//! 对话框矩形由 [`dialog_area`] 纯函数给出，Event 层用同一函数
//! 判定蒙层点击。

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use user_directory_core::User;

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染弹窗（如果有可见弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    if !app.modal.is_open() {
        return;
    }
    let Some(ref modal) = app.modal.active else {
        return;
    };

    let area = dialog_area(modal, frame.area());
    match modal {
        Modal::UserDetail { user } => render_user_detail(frame, area, user),
        Modal::Help => render_help(frame, area),
    }
}

/// 计算弹窗的对话框矩形
pub fn dialog_area(modal: &Modal, area: Rect) -> Rect {
    match modal {
        Modal::UserDetail { .. } => centered_rect(62, 17, area),
        Modal::Help => centered_rect(46, 12, area),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染用户详情弹窗
fn render_user_detail(frame: &mut Frame, area: Rect, user: &User) {
    let texts = t();

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.detail_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);

    let lines = vec![
        Line::styled(
            user.full_name(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(user.role.clone(), Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.modal.email), label),
            Span::styled(user.email.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.modal.username), label),
            Span::styled(user.username.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.modal.join_date), label),
            Span::styled(user.join_date.clone(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.modal.avatar), label),
            Span::styled(user.avatar.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::styled(format!("{}:", texts.modal.description), label),
        Line::styled(user.description.clone(), value),
        Line::from(""),
        Line::styled(
            format!("[Esc] {}", texts.common.close),
            Style::default().fg(Color::DarkGray),
        )
        .centered(),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame, area: Rect) {
    let texts = t();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bindings = [
        ("←/→", texts.hints.page),
        ("↑/↓", texts.hints.select),
        ("Enter", texts.hints.view),
        ("1-9", texts.hints.goto_page),
        ("Alt+L", texts.hints.language),
        ("q", texts.common.quit),
        ("Esc", texts.common.close),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Cyan)),
                Span::styled(*action, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
