//！┌────────────────────────────────────────────────────────────────────┐
//！│                         主循环 (app.rs)                            │
//！│                                                                    │
//！│   ┌─────────┐         ┌───────────┐         ┌──────────┐          │
//！│   │  Event  │ ──────▶ │  Message  │ ──────▶ │  Update  │          │
//！│   │   层    │  翻译    │    层     │  消费    │    层    │          │
//！│   └─────────┘         │ AppMessage│         └────┬─────┘          │
//！│        ▲              │ PagerMsg  │              │ 修改           │
//！│        │              │ ModalMsg  │              ▼                │
//！│   ┌─────────┐         └───────────┘         ┌──────────┐          │
//！│   │  View   │ ◀──────────── 读取 ────────── │  Model   │          │
//！│   │   层    │                               │    层    │          │
//！│   └─────────┘                               └────┬─────┘          │
//！│                                                  │ mpsc 消息      │
//！│                                             ┌──────────┐          │
//！│                                             │ Backend  │          │
//！│                                             │    层    │          │
//！│                                             └────┬─────┘          │
//！│                                                  ▼                │
//！│                                       ┌────────────────────┐      │
//！│                                       │user-directory-core │      │
//！│                                       └────────────────────┘      │
//！└────────────────────────────────────────────────────────────────────┘

//!
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构与局部状态迁移，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//! 三个互不依赖的状态切片：
//!     state/users.rs      // 加载生命周期（Idle → Loading → Loaded/Failed）
//!     state/pager.rs      // 分页状态（当前页 + 页内光标）
//!     state/modal.rs      // 弹窗状态（详情选择 + 可见标志）
//!
//! 切片之间只通过 App 上的状态值协作：Pager 的可见切片由
//! `users` 集合纯函数推导；Modal 的选中记录来自可见切片中的一条。

mod app;
pub mod state;

pub use app::App;
pub use state::{LoadState, Modal, ModalState, PagerState, UsersState};
