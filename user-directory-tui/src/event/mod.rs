//! Event 层：事件处理
//!
//! 负责将键盘/鼠标输入事件翻译为 Message，自身不修改任何状态。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//! 判断顺序：
//!     - 有弹窗打开时，优先交给 handle_modal_keys 处理
//!     - 全局快捷键（退出、帮助、语言）就地翻译
//!     - 其余按键按列表页语义翻译（翻页、光标、打开详情）
//!     - 鼠标按下按命中区域翻译（卡片 → 打开详情；蒙层 → 关闭弹窗）

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
