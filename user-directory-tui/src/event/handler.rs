//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Margin, Position, Rect};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, PagerMessage};
use crate::model::{App, Modal};
use crate::view;

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
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
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

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }

    // 列表页 Esc 只清除状态栏消息
    if DefaultKeymap::CLOSE.matches(&key) {
        return AppMessage::ClearStatus;
    }

    handle_list_keys(key)
}

/// 处理列表页的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ← 或 h: 上一页
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Pager(PagerMessage::PrevPage),

        // → 或 l: 下一页
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Pager(PagerMessage::NextPage),

        // ↑ 或 k: 光标上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Pager(PagerMessage::CursorUp),

        // ↓ 或 j: 光标下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Pager(PagerMessage::CursorDown),

        // Home: 第一页
        KeyCode::Home => AppMessage::Pager(PagerMessage::FirstPage),

        // End: 最后一页
        KeyCode::End => AppMessage::Pager(PagerMessage::LastPage),

        // Enter: 查看光标所在记录
        KeyCode::Enter => AppMessage::Pager(PagerMessage::OpenSelected),

        // 数字键: 直接跳页（越界由状态层钳制为无操作）
        KeyCode::Char(ch @ '1'..='9') if key.modifiers.is_empty() => {
            AppMessage::Pager(PagerMessage::GoToPage(ch as usize - '0' as usize))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::CLOSE.matches(&key)
        || (key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c'))
    {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        // 帮助弹窗同时响应 Enter 关闭
        Some(Modal::Help) if key.code == KeyCode::Enter => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
///
/// 命中判定复用 View 层的纯布局函数，保证与渲染结果一致。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return AppMessage::Noop;
    }

    let Ok((width, height)) = crossterm::terminal::size() else {
        return AppMessage::Noop;
    };
    let area = Rect::new(0, 0, width, height);
    let position = Position::new(mouse.column, mouse.row);

    // 弹窗打开时：对话框外的一切点击都是蒙层关闭
    if app.modal.is_open() {
        if let Some(ref modal) = app.modal.active {
            let dialog = view::components::modal::dialog_area(modal, area);
            if !dialog.contains(position) {
                return AppMessage::Modal(ModalMessage::Close);
            }
        }
        return AppMessage::Noop;
    }

    // 列表页：命中卡片行则打开对应记录
    let chunks = view::layout::screen_chunks(area);
    let cards = chunks.content.inner(Margin::new(1, 1));
    if cards.contains(position) {
        let index = (position.y - cards.y) as usize;
        return AppMessage::Pager(PagerMessage::OpenAt(index));
    }

    AppMessage::Noop
}
