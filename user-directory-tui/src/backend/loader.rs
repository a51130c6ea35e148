//! 后台任务入口
//!
//! 持有 Backend → 主循环 的消息发送端。两类任务：
//! - 启动时唯一一次的列表请求（无轮询、无取消、无自动重试）
//! - 打开详情时对头像资源的尽力探测

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use user_directory_core::{http, User, UserSource, PLACEHOLDER_AVATAR};

use crate::message::AppMessage;

/// 后台任务入口
pub struct Backend {
    /// 投递到主循环的消息通道
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    /// 创建后台任务入口
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }

    /// 发起唯一一次列表请求
    ///
    /// 成功与失败都以 `UsersLoaded` 消息回到主循环；主循环退出后
    /// 发送失败被静默忽略（请求生命周期短于应用生命周期）。
    pub fn spawn_initial_fetch(&self, source: Arc<dyn UserSource>) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_users().await;
            let _ = tx.send(AppMessage::UsersLoaded(result));
        });
    }

    /// 尽力探测被查看记录的头像资源
    ///
    /// 只在失败时投递消息；已经是占位图的记录不再探测。
    pub fn spawn_avatar_probe(&self, user: &User) {
        if user.avatar == PLACEHOLDER_AVATAR {
            return;
        }

        let tx = self.tx.clone();
        let user_id = user.id.clone();
        let url = user.avatar.clone();
        tokio::spawn(async move {
            if !http::avatar_reachable(&url).await {
                let _ = tx.send(AppMessage::AvatarProbeFailed { user_id });
            }
        });
    }
}
