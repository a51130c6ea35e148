//! Message 层：事件消息定义
//!
//! 作为 Event/Backend —→ Update 之间的桥梁。
//! 所有的用户操作、后台结果和状态变更都通过 Message 来表达：
//! Event 层把键盘/鼠标事件翻译成消息，Backend 层把异步结果投递成消息，
//! Update 层根据消息更新 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息（含 Backend 投递的加载结果）
//!         mod modal;          // 弹窗子消息
//!         mod pager;          // 分页/列表子消息

mod app;
mod modal;
mod pager;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use pager::PagerMessage;
