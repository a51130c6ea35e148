//! View 层：UI 渲染
//!
//! View 层只读取 Model，把当前状态画成一帧；分页切片与页码序列
//! 都在渲染时由纯函数重新推导，本层不保存任何派生状态。

pub mod components;
pub mod layout;
mod pages;

pub use layout::render;

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;
    use user_directory_core::{User, FETCH_FAILED_MESSAGE};

    use crate::backend::Backend;
    use crate::model::App;

    fn test_app() -> App {
        // 渲染路径不投递消息，接收端直接丢弃
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Backend::new(tx))
    }

    fn john_doe() -> User {
        User {
            id: "1".into(),
            username: "jdoe".into(),
            firstname: "John".into(),
            lastname: "Doe".into(),
            email: "jdoe@example.com".into(),
            avatar: "https://robohash.org/jdoe.png".into(),
            role: "Engineer".into(),
            join_date: "01/01/2023".into(),
            description: "A skilled engineer.".into(),
        }
    }

    /// 渲染一帧并把字符缓冲拼接为文本
    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| super::render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content().iter().enumerate() {
            if i > 0 && i % width == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn loading_screen_shows_only_the_indicator() {
        let mut app = test_app();
        app.users.begin_loading();

        let text = render_to_text(&app);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Prev"));
        assert!(!text.contains("Next"));
    }

    #[test]
    fn failure_screen_shows_only_the_error() {
        let mut app = test_app();
        app.users.begin_loading();
        app.users.set_failed(FETCH_FAILED_MESSAGE);

        let text = render_to_text(&app);
        assert!(text.contains("Failed to fetch users."));
        // 没有卡片，也没有分页控件
        assert!(!text.contains("John"));
        assert!(!text.contains("Prev"));
        assert!(!text.contains("Next"));
    }

    #[test]
    fn loaded_screen_shows_card_and_role() {
        let mut app = test_app();
        app.users.set_loaded(vec![john_doe()]);

        let text = render_to_text(&app);
        assert!(text.contains("John Doe"));
        assert!(text.contains("Engineer"));
        // 详情文本只出现在弹窗里
        assert!(!text.contains("A skilled engineer."));
    }

    #[test]
    fn empty_directory_is_a_single_disabled_page() {
        let mut app = test_app();
        app.users.set_loaded(vec![]);

        let text = render_to_text(&app);
        assert!(text.contains("No users in the directory"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));
        assert!(text.contains(" 1 "));
        assert!(!text.contains(" 2 "));
    }

    #[test]
    fn modal_shows_full_record_in_its_own_container() {
        let mut app = test_app();
        app.users.set_loaded(vec![john_doe()]);
        app.modal.show_user_detail(john_doe());

        let text = render_to_text(&app);
        assert!(text.contains("User Details"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("A skilled engineer."));
        assert!(text.contains("jdoe@example.com"));
        assert!(text.contains("jdoe"));
        assert!(text.contains("01/01/2023"));
    }

    #[test]
    fn dismissed_modal_leaves_no_detail_text() {
        let mut app = test_app();
        app.users.set_loaded(vec![john_doe()]);
        app.modal.show_user_detail(john_doe());
        app.modal.dismiss();

        let text = render_to_text(&app);
        assert!(!text.contains("User Details"));
        assert!(!text.contains("A skilled engineer."));
    }

    #[test]
    fn pagination_shows_compact_sequence_for_many_pages() {
        let mut app = test_app();
        let users = (1..=160)
            .map(|i| {
                let mut u = john_doe();
                u.id = i.to_string();
                u
            })
            .collect();
        app.users.set_loaded(users);
        // 20 页，跳到第 10 页
        for _ in 0..9 {
            app.pager.next_page(160);
        }

        let text = render_to_text(&app);
        assert!(text.contains('…'));
        assert!(text.contains(" 10 "));
        assert!(text.contains(" 20 "));
    }
}
