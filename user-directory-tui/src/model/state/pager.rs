//! 分页状态
//!
//! 页码从 1 开始，始终满足 `1 <= current_page <= total_pages`；
//! 越界的跳转是无操作而不是错误。可见切片与页码序列由
//! `user_directory_core::pagination` 的纯函数按需推导，这里只保存
//! 当前页与页内光标两个标量。

use user_directory_core::pagination::{self, PageMarker, PAGE_SIZE};

/// 分页状态
#[derive(Debug)]
pub struct PagerState {
    /// 当前页（1-based）
    pub current_page: usize,
    /// 当前页内高亮卡片的索引（0-based）
    pub cursor: usize,
}

impl Default for PagerState {
    fn default() -> Self {
        Self {
            current_page: 1,
            cursor: 0,
        }
    }
}

impl PagerState {
    /// 创建新的分页状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 总页数（空集合也至少一页）
    pub fn total_pages(&self, len: usize) -> usize {
        pagination::total_pages(len, PAGE_SIZE)
    }

    /// 跳转到指定页；目标在 `[1, total_pages]` 之外时无操作
    pub fn go_to_page(&mut self, page: usize, len: usize) {
        if page >= 1 && page <= self.total_pages(len) && page != self.current_page {
            self.current_page = page;
            self.cursor = 0;
        }
    }

    /// 上一页（已在第一页时无操作）
    pub fn prev_page(&mut self, len: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), len);
    }

    /// 下一页（已在最后一页时无操作）
    pub fn next_page(&mut self, len: usize) {
        self.go_to_page(self.current_page + 1, len);
    }

    /// 是否存在上一页（控件在第一页置灰）
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// 是否存在下一页（控件在最后一页置灰）
    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    /// 当前页可见记录条数
    pub fn slice_len(&self, len: usize) -> usize {
        len.saturating_sub(self.current_page.saturating_sub(1).saturating_mul(PAGE_SIZE))
            .min(PAGE_SIZE)
    }

    /// 导航控件的紧凑页码序列
    pub fn markers(&self, len: usize) -> Vec<PageMarker> {
        pagination::page_markers(self.current_page, self.total_pages(len))
    }

    /// 光标上移
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 光标下移（不越过当前页最后一条）
    pub fn cursor_down(&mut self, slice_len: usize) {
        if self.cursor + 1 < slice_len {
            self.cursor += 1;
        }
    }
}
