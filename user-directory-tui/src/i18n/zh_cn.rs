//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HintTexts, ModalTexts, PaginationTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "用户目录 TUI",
        loading: "加载中...",
        close: "关闭",
        quit: "退出",
    },

    users: UsersTexts {
        title: "用户",
        no_users: "目录中没有用户",
        view_more: "查看更多",
    },

    pagination: PaginationTexts {
        previous: "上一页",
        next: "下一页",
    },

    modal: ModalTexts {
        detail_title: "用户详情",
        email: "邮箱",
        username: "用户名",
        join_date: "加入日期",
        description: "简介",
        avatar: "头像",
        help_title: "帮助",
    },

    hints: HintTexts {
        page: "翻页",
        select: "选择",
        view: "查看",
        goto_page: "跳页",
        language: "语言",
        help: "帮助",
    },
};
