// Consumer - 並列ワーカー機能

use crate::core::{RecordMatcher, ResultEmitter, RunState};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一Consumerワーカー
///
/// ジョブチャンネルが閉じるか、キャンセルされるまでジョブを処理する。
/// 返り値は処理したジョブ数。
pub fn spawn_single_consumer<M>(
    worker_id: usize,
    matcher: Arc<M>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<M::Job>>>,
    emitter: ResultEmitter<M::Output>,
    state: Arc<RunState>,
) -> tokio::task::JoinHandle<usize>
where
    M: RecordMatcher,
{
    tokio::spawn(async move {
        tracing::debug!("[worker{worker_id}] START");
        let mut processed = 0;

        loop {
            // 次のジョブを取得（キャンセルを優先）
            let job = {
                let mut rx = work_rx.lock().await;
                tokio::select! {
                    biased;
                    _ = state.cancelled() => None,
                    job = rx.recv() => job,
                }
            };
            let Some(job) = job else {
                break; // チャンネル終了またはキャンセル
            };
            if state.is_cancelled() {
                break;
            }

            if let Err(error) = matcher.match_job(worker_id, job, &emitter).await {
                tracing::error!("[worker{worker_id}] {error}");
                state.fail(error);
                break;
            }
            processed += 1;
        }

        tracing::debug!("[worker{worker_id}] END : 処理件数={processed}");
        processed
    })
}

/// Consumers: 並列ワーカープール
///
/// `result_tx` は各ワーカーに複製され、全ワーカー終了時に結果チャンネルが閉じる。
pub fn spawn_consumers<M>(
    matcher: Arc<M>,
    work_rx: mpsc::Receiver<M::Job>,
    result_tx: mpsc::Sender<M::Output>,
    state: Arc<RunState>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<usize>>
where
    M: RecordMatcher,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::with_capacity(worker_count);

    for worker_id in 0..worker_count {
        let handle = spawn_single_consumer(
            worker_id,
            Arc::clone(&matcher),
            Arc::clone(&work_rx),
            ResultEmitter::new(result_tx.clone(), Arc::clone(&state)),
            Arc::clone(&state),
        );
        handles.push(handle);
    }

    handles
}
