// Producer - ジョブ配信機能

use crate::core::{JobSource, RunState};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: ジョブ供給元からジョブを配信し、配信件数を返す
///
/// 供給元の失敗は実行状態に記録される（キャンセルが発火する）。
pub fn spawn_producer<S>(
    source: S,
    work_tx: mpsc::Sender<S::Job>,
    state: Arc<RunState>,
) -> tokio::task::JoinHandle<usize>
where
    S: JobSource,
{
    tokio::spawn(async move {
        let label = source.describe();
        tracing::info!("[createJobs] START : {label}");

        // work_txは供給元に渡り、終了時にドロップされてチャンネルが閉じる
        match source.produce(work_tx, Arc::clone(&state)).await {
            Ok(count) => {
                tracing::info!("[createJobs] END : 生成したジョブの数={count}");
                count
            }
            Err(error) => {
                tracing::error!("[createJobs] {error}");
                state.fail(error);
                0
            }
        }
    })
}
