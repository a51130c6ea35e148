//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 用户列表页文本
    pub users: UsersTexts,
    /// 分页控件文本
    pub pagination: PaginationTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
}

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

/// 用户列表页文本
pub struct UsersTexts {
    pub title: &'static str,
    pub no_users: &'static str,
    pub view_more: &'static str,
}

/// 分页控件文本
pub struct PaginationTexts {
    pub previous: &'static str,
    pub next: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub detail_title: &'static str,
    pub email: &'static str,
    pub username: &'static str,
    pub join_date: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub help_title: &'static str,
}

/// 状态栏快捷键提示
pub struct HintTexts {
    pub page: &'static str,
    pub select: &'static str,
    pub view: &'static str,
    pub goto_page: &'static str,
    pub language: &'static str,
    pub help: &'static str,
}
