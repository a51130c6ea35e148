//! 应用主状态结构

use crate::backend::Backend;

use super::{ModalState, PagerState, UsersState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 用户列表加载状态
    pub users: UsersState,

    /// 分页状态
    pub pager: PagerState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 后台任务入口（头像探测等）
    pub backend: Backend,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend: Backend) -> Self {
        Self {
            should_quit: false,
            users: UsersState::new(),
            pager: PagerState::new(),
            modal: ModalState::new(),
            status_message: None,
            backend,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
