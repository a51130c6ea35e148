//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;

/// 主屏幕分区
///
/// Event 层用同一函数做鼠标命中判定，保证与渲染一致。
pub struct ScreenChunks {
    pub title: Rect,
    pub content: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

/// 计算主屏幕分区：标题栏 + 卡片列表 + 分页控件 + 状态栏
pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 卡片列表
            Constraint::Length(3), // 分页控件
            Constraint::Length(1), // 状态栏
        ])
        .split(area);

    ScreenChunks {
        title: chunks[0],
        content: chunks[1],
        pagination: chunks[2],
        status: chunks[3],
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 加载中：整屏只有加载指示
    if app.users.is_loading() {
        pages::users::render_loading(frame, size);
        return;
    }

    // 加载失败：整屏只有错误文本，列表/分页/弹窗全部抑制
    if let Some(message) = app.users.error_message() {
        pages::users::render_error(frame, size, message);
        return;
    }

    let chunks = screen_chunks(size);

    render_title_bar(frame, chunks.title);
    pages::users::render(app, frame, chunks.content);
    components::pagination::render(app, frame, chunks.pagination);
    components::statusbar::render(app, frame, chunks.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(" {} v0.1.0", t().common.app_name))
        .style(Style::default().bg(Color::Cyan).fg(Color::Black));
    frame.render_widget(title, area);
}
