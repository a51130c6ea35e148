//! 分页/列表更新逻辑

use user_directory_core::pagination::{page_slice, PAGE_SIZE};

use crate::message::PagerMessage;
use crate::model::App;

/// 处理分页/列表消息
pub fn update(app: &mut App, msg: PagerMessage) {
    let len = app.users.len();

    match msg {
        // ========== 翻页 ==========
        PagerMessage::PrevPage => {
            app.pager.prev_page(len);
        }
        PagerMessage::NextPage => {
            app.pager.next_page(len);
        }
        PagerMessage::FirstPage => {
            app.pager.go_to_page(1, len);
        }
        PagerMessage::LastPage => {
            let last = app.pager.total_pages(len);
            app.pager.go_to_page(last, len);
        }
        PagerMessage::GoToPage(page) => {
            app.pager.go_to_page(page, len);
        }

        // ========== 页内光标 ==========
        PagerMessage::CursorUp => {
            app.pager.cursor_up();
        }
        PagerMessage::CursorDown => {
            let slice_len = app.pager.slice_len(len);
            app.pager.cursor_down(slice_len);
        }

        // ========== 详情 ==========
        PagerMessage::OpenSelected => {
            open_detail(app, app.pager.cursor);
        }
        PagerMessage::OpenAt(index) => {
            if index < app.pager.slice_len(len) {
                app.pager.cursor = index;
                open_detail(app, index);
            }
        }
    }
}

/// 打开当前页第 `index` 条记录的详情弹窗
fn open_detail(app: &mut App, index: usize) {
    let visible = page_slice(app.users.users(), PAGE_SIZE, app.pager.current_page);
    let Some(user) = visible.get(index).cloned() else {
        return;
    };

    app.backend.spawn_avatar_probe(&user);
    app.modal.show_user_detail(user);
}
