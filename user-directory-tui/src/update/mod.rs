//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod pager;          // 分页/列表子消息处理
//!         mod modal;          // 弹窗子消息处理
//!
//! 主更新函数使用 match 穷举，每个 Message 变体对应一个状态迁移；
//! 复杂的子消息委托给子模块处理。每条消息运行到完成后控制权才回到
//! 主循环，下一轮渲染读取更新后的 Model。

mod modal;
mod pager;

use crate::i18n;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::UsersLoaded(Ok(users)) => {
            log::debug!("Directory loaded: {} user(s)", users.len());
            app.users.set_loaded(users);
        }

        AppMessage::UsersLoaded(Err(e)) => {
            // 面向用户只有一种文本；区别保留在运行日志里
            if e.is_expected() {
                log::warn!("Directory load failed: {e}");
            } else {
                log::error!("Directory load failed: {e}");
            }
            app.users.set_failed(e.user_message());
        }

        AppMessage::AvatarProbeFailed { user_id } => {
            app.users.mark_avatar_broken(&user_id);
            // 详情弹窗里的快照一并修复
            app.modal.mark_avatar_broken(&user_id);
        }

        AppMessage::Pager(pager_msg) => {
            // 弹窗打开或尚未加载完成时，列表不响应任何操作
            if !app.modal.is_open() && !app.users.is_loading() && app.users.error_message().is_none()
            {
                pager::update(app, pager_msg);
            }
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleLanguage => {
            let next = i18n::current_language().next();
            i18n::set_language(next);
            app.set_status(format!("Language: {}", next.display_name()));
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
