//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     while let Ok(msg) = msg_rx.try_recv() {         // 1. 先清空后台任务发回的消息
//!         update + dispatch
//!     }
//!     terminal.draw(|f| view::render(&app, f))        // 2. 渲染 UI
//!     if app.should_quit { break }                    // 3. 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 4. 轮询输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并翻译成消息
//!         update + dispatch                               // 5. 更新状态，派发产生的 Action
//!     }
//! }
//!
//! 远端请求从不在这条线程上执行：Update 返回的 Action 交给
//! backend::dispatch spawn 成 tokio 任务，结果经 mpsc 回流。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::backend::{self, RosterBackend};
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
    backend: Arc<RosterBackend>,
    msg_tx: mpsc::UnboundedSender<AppMessage>,
    mut msg_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 先消费后台任务发回的消息
        while let Ok(msg) = msg_rx.try_recv() {
            apply(app, msg, &backend, &msg_tx);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息并更新状态
            let msg = event::handle_event(event, app);
            apply(app, msg, &backend, &msg_tx);
        }
    }

    Ok(())
}

/// 更新状态并派发产生的后台动作
fn apply(
    app: &mut App,
    msg: AppMessage,
    backend: &Arc<RosterBackend>,
    msg_tx: &mpsc::UnboundedSender<AppMessage>,
) {
    for action in update::update(app, msg) {
        backend::dispatch(action, backend.clone(), msg_tx.clone());
    }
}
