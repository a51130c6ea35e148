//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HintTexts, ModalTexts, PaginationTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "User Directory TUI",
        loading: "Loading...",
        close: "Close",
        quit: "Quit",
    },

    users: UsersTexts {
        title: "Users",
        no_users: "No users in the directory",
        view_more: "View More",
    },

    pagination: PaginationTexts {
        previous: "Prev",
        next: "Next",
    },

    modal: ModalTexts {
        detail_title: "User Details",
        email: "Email",
        username: "Username",
        join_date: "Join Date",
        description: "Description",
        avatar: "Avatar",
        help_title: "Help",
    },

    hints: HintTexts {
        page: "Page",
        select: "Select",
        view: "View",
        goto_page: "Page #",
        language: "Language",
        help: "Help",
    },
};
