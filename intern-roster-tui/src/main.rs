//! Intern Roster TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 远端同步是异步的：Update 层产生 Action，Backend 层在 tokio
//! 任务里执行并把结果经 mpsc 发回主循环，渲染线程从不被网络阻塞。
//! 请求不去重也不可取消，竞争结果由远端和网络顺序决定。
//!
//!
//! main.rs 的执行顺序：
//!
//!     load_config()           // 读配置（API 基地址、主题）
//!     init_logging()          // 日志写文件，终端留给 UI
//!     init_terminal()         // 进入备用屏幕 + raw mode
//!     model::App::new()       // 创建 APP 实例
//!     dispatch(LoadRoster)    // 启动即拉取花名册（挂载钩子）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use message::AppMessage;
use update::Action;
use util::{init_terminal, install_panic_hook, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置并初始化日志
    let config = backend::load_config()?;
    let _log_guard = init_logging()?;
    view::theme::set_theme_index(config.theme);

    log::info!("intern-roster-tui starting, api = {}", config.api_base_url);

    // 2. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例与后台服务
    let mut app = model::App::new();
    let backend = Arc::new(backend::RosterBackend::new(&config.api_base_url));
    let (msg_tx, msg_rx) = mpsc::unbounded_channel::<AppMessage>();

    // 4. 启动即拉取花名册
    app.roster.loading = true;
    backend::dispatch(Action::LoadRoster, backend.clone(), msg_tx.clone());

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, backend, msg_tx, msg_rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 初始化文件日志
///
/// 返回的 guard 要在 main 的作用域里活到退出，缓冲日志才会落盘。
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = backend::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "intern-roster.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    Ok(guard)
}
