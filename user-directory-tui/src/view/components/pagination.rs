//! 分页控件
//!
//! 上一页/下一页按钮 + 紧凑页码序列。按钮在各自边界置灰，
//! 当前页高亮，省略号为不可交互的占位符。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use user_directory_core::pagination::PageMarker;

use crate::i18n::t;
use crate::model::App;

/// 渲染分页控件
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let len = app.users.len();

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();

    // 上一页 —— 第一页置灰
    spans.push(Span::styled(
        format!("◀ {}", texts.pagination.previous),
        button_style(app.pager.has_prev()),
    ));
    spans.push(Span::raw("   "));

    // 紧凑页码序列
    for marker in app.pager.markers(len) {
        match marker {
            PageMarker::Number(page) => {
                let style = if page == app.pager.current_page {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(format!(" {page} "), style));
            }
            PageMarker::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray)));
            }
        }
    }

    spans.push(Span::raw("   "));
    // 下一页 —— 最后一页置灰
    spans.push(Span::styled(
        format!("{} ▶", texts.pagination.next),
        button_style(app.pager.has_next(len)),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).centered();
    frame.render_widget(paragraph, inner);
}

/// 可用/置灰按钮样式
fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
