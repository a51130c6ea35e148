//! 用户列表页视图
//!
//! 一行一张卡片：头像占位符、姓名、角色徽章，光标行附带
//! "View More" 提示。可见切片在每次渲染时重新推导。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;
use user_directory_core::pagination::{page_slice, PAGE_SIZE};

use crate::i18n::t;
use crate::model::App;

/// 姓名列显示宽度
const NAME_COLUMN_WIDTH: usize = 26;

/// 渲染加载中画面（整屏只有一张加载卡片）
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let width = 30.min(area.width);
    let height = 3.min(area.height);
    let card = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let paragraph = Paragraph::new(t().common.loading)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, card);
}

/// 渲染加载失败画面（整屏只有错误文本）
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message).style(Style::default().fg(Color::Red));
    frame.render_widget(paragraph, area);
}

/// 渲染用户列表页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let block = Block::default()
        .title(format!(" {} ", texts.users.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = page_slice(app.users.users(), PAGE_SIZE, app.pager.current_page);
    if visible.is_empty() {
        render_empty(frame, inner);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.pager.cursor;

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let role_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = vec![
                Span::raw("  "),
                Span::styled("◉ ", Style::default().fg(Color::Magenta)),
                Span::styled(pad_display(&user.full_name(), NAME_COLUMN_WIDTH), name_style),
                Span::styled(format!("[{}]", user.role), role_style),
            ];

            if is_selected {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("⏎ {}", texts.users.view_more),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.pager.cursor));

    frame.render_stateful_widget(list, inner, &mut state);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.users.no_users),
            Style::default().fg(Color::Gray),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 按显示宽度截断并补齐到固定列宽
fn pad_display(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if UnicodeWidthStr::width(text) <= width {
        out.push_str(text);
        used = UnicodeWidthStr::width(text);
    } else {
        for ch in text.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + ch_width > width.saturating_sub(1) {
                break;
            }
            out.push(ch);
            used += ch_width;
        }
        out.push('…');
        used += 1;
    }

    for _ in used..width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_padded_to_column() {
        let padded = pad_display("John Doe", 12);
        assert_eq!(padded.len(), 12);
        assert!(padded.starts_with("John Doe"));
    }

    #[test]
    fn long_name_truncated_with_ellipsis() {
        let padded = pad_display("A Very Long Name Indeed", 10);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 10);
        assert!(padded.contains('…'));
    }

    #[test]
    fn wide_characters_counted_by_display_width() {
        // 全角字符宽度 2
        let padded = pad_display("张伟", 8);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 8);
    }
}
