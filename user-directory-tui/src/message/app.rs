//! 应用主消息枚举

use user_directory_core::{DirectoryError, User};

use super::{ModalMessage, PagerMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列表请求完成（Backend 投递，一次进程恰好一条）
    UsersLoaded(Result<Vec<User>, DirectoryError>),

    /// 头像探测失败（Backend 投递，仅触发占位图替换）
    AvatarProbeFailed { user_id: String },

    /// 分页/列表相关消息
    Pager(PagerMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    ToggleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
