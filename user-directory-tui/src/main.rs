//! User Directory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 启动流程：
//!     init_terminal()             // 初始化终端（备用屏幕 + 鼠标捕获）
//!     model::App::new()           // 创建 App 实例（LoadState::Idle）
//!     backend.spawn_initial_fetch // 发起唯一一次用户列表请求
//!     app::run()                  // 运行主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! 加载生命周期（Idle → Loading → Loaded/Failed）在此完成 Idle → Loading
//! 的迁移；其余迁移由 Backend 投递的 `UsersLoaded` 消息驱动。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use user_directory_core::HttpUserSource;

use backend::Backend;
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 创建 Backend → 主循环 的消息通道与应用实例
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = model::App::new(Backend::new(tx));

    // 3. 发起唯一一次列表请求（结果以消息形式回到主循环）
    let source = Arc::new(HttpUserSource::from_env());
    app.users.begin_loading();
    app.backend.spawn_initial_fetch(source);

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 返回结果
    result
}
