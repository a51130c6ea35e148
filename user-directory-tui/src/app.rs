//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 检查是否应该退出
//!     while rx.try_recv()                         // 排空 Backend 消息
//!         update::update(&mut app, msg)           //（加载结果、头像探测）
//!     if let Some(event) = poll_event() {         // 轮询输入，在此等待 100ms
//!         let msg = handle_event(event, &app);    // 接收原始事件并翻译为消息
//!         update::update(&mut app, msg)           // 更新应用状态
//!     }
//! }
//!
//! Backend 消息与输入消息都在本线程逐条消费，每次状态迁移运行到完成后
//! 才处理下一条，状态切片之间不存在交错修改。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 排空 Backend 投递的消息
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
