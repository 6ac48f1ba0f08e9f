//! 后台任务派发
//!
//! Update 层产生 Action，这里为每个 Action 启动一个 tokio 任务，
//! 结果以 [`BackendMessage`] 发回主循环。请求一经发出不可取消，
//! 也不做去重或排序：并发请求的先后由远端和网络决定。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use intern_roster_core::{ApiError, CoreError, InternDraft};

use crate::message::{AppMessage, BackendMessage};
use crate::update::Action;

use super::RosterBackend;

/// 执行一个后台动作
pub fn dispatch(action: Action, backend: Arc<RosterBackend>, msg_tx: UnboundedSender<AppMessage>) {
    match action {
        Action::LoadRoster => spawn_load(backend, msg_tx),
        Action::SaveDraft { draft, editing } => spawn_save(backend, msg_tx, draft, editing),
        Action::DeleteIntern { id } => spawn_delete(backend, msg_tx, id),
    }
}

/// 后台拉取花名册
fn spawn_load(backend: Arc<RosterBackend>, msg_tx: UnboundedSender<AppMessage>) {
    tokio::spawn(async move {
        let msg = match backend.load_all().await {
            Ok(interns) => BackendMessage::RosterLoaded(interns),
            Err(e) => {
                log::error!("Error fetching interns: {e}");
                BackendMessage::RosterLoadFailed(e.to_string())
            }
        };
        let _ = msg_tx.send(AppMessage::Backend(msg));
    });
}

/// 后台保存草稿
fn spawn_save(
    backend: Arc<RosterBackend>,
    msg_tx: UnboundedSender<AppMessage>,
    draft: InternDraft,
    editing: bool,
) {
    tokio::spawn(async move {
        let msg = match backend.save(&draft, editing).await {
            Ok(()) => BackendMessage::SaveCompleted,
            Err(CoreError::Api(ApiError::Rejected { errors })) => {
                BackendMessage::SaveRejected(errors)
            }
            Err(e) => {
                log::error!("Error saving intern: {e}");
                BackendMessage::SaveFailed(e.to_string())
            }
        };
        let _ = msg_tx.send(AppMessage::Backend(msg));
    });
}

/// 后台删除记录
fn spawn_delete(backend: Arc<RosterBackend>, msg_tx: UnboundedSender<AppMessage>, id: i64) {
    tokio::spawn(async move {
        // 失败信息只用于提示；收尾动作（刷新 + 关弹窗）对成败一视同仁
        let error = match backend.delete(id).await {
            Ok(()) => None,
            Err(e) => {
                log::error!("Error deleting intern: {e}");
                Some(e.to_string())
            }
        };
        let _ = msg_tx.send(AppMessage::Backend(BackendMessage::DeleteFinished { error }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::sync::mpsc;

    // 指向不可达的本地端口：请求立刻被拒绝，传输失败走消息回流
    fn unreachable_backend() -> Arc<RosterBackend> {
        Arc::new(RosterBackend::new("http://127.0.0.1:9/"))
    }

    #[tokio::test]
    async fn failed_load_comes_back_as_a_message() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();

        dispatch(Action::LoadRoster, unreachable_backend(), msg_tx);

        let msg = msg_rx.recv().await;
        assert!(matches!(
            msg,
            Some(AppMessage::Backend(BackendMessage::RosterLoadFailed(_)))
        ));
    }

    #[tokio::test]
    async fn failed_delete_still_reports_finished() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();

        dispatch(Action::DeleteIntern { id: 5 }, unreachable_backend(), msg_tx);

        let msg = msg_rx.recv().await;
        assert!(matches!(
            msg,
            Some(AppMessage::Backend(BackendMessage::DeleteFinished {
                error: Some(_)
            }))
        ));
    }

    #[tokio::test]
    async fn failed_save_is_a_transport_failure_not_a_rejection() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();

        dispatch(
            Action::SaveDraft {
                draft: InternDraft::default(),
                editing: false,
            },
            unreachable_backend(),
            msg_tx,
        );

        let msg = msg_rx.recv().await;
        assert!(matches!(
            msg,
            Some(AppMessage::Backend(BackendMessage::SaveFailed(_)))
        ));
    }
}
