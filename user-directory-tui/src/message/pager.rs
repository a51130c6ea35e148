//! 分页/列表消息
//!
//! 处理列表页中的操作：翻页、页内光标移动、打开详情

/// 分页/列表消息
#[derive(Debug, Clone)]
pub enum PagerMessage {
    // ========== 翻页 ==========
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,
    /// 跳转到第一页
    FirstPage,
    /// 跳转到最后一页
    LastPage,
    /// 跳转到指定页（数字键）
    GoToPage(usize),

    // ========== 页内光标 ==========
    /// 光标上移
    CursorUp,
    /// 光标下移
    CursorDown,

    // ========== 详情 ==========
    /// 打开光标所在记录的详情
    OpenSelected,
    /// 打开指定索引的记录详情（鼠标点击卡片）
    OpenAt(usize),
}
