//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（Esc、关闭提示或点击蒙层，契约相同）
    Close,
}
