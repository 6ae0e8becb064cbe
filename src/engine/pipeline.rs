// Pipeline - Producer-Consumer パイプライン
// メインパイプライン機能とオーケストレーション

use super::{consumer::spawn_consumers, producer::spawn_producer};
use crate::{
    core::{
        JobSource, ProgressReporter, RecordMatcher, RunState, ScanConfig, ScanError, ScanOutcome,
        ScanResult, ScanSummary,
    },
    services::{config::validate_scan_config, report::spawn_result_collector},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// 責任が明確に分離されたパイプライン
///
/// Producer(1) → ジョブチャンネル → Consumer(N) → 結果チャンネル → Collector(1)
pub struct ScanPipeline<M> {
    matcher: Arc<M>,
}

impl<M> ScanPipeline<M>
where
    M: RecordMatcher,
{
    /// 新しいパイプラインを作成
    pub fn new(matcher: Arc<M>) -> Self {
        Self { matcher }
    }

    /// ジョブ供給元の全ジョブを処理し、未ソートの結果を返す
    ///
    /// いずれかのタスクが失敗した場合は最初のエラーを返す。
    pub async fn execute<S, C, R>(
        &self,
        source: S,
        config: &C,
        reporter: Arc<R>,
    ) -> ScanResult<ScanOutcome<M::Output>>
    where
        S: JobSource<Job = M::Job>,
        C: ScanConfig + ?Sized,
        R: ProgressReporter + 'static,
    {
        validate_scan_config(config)?;
        let start_time = Instant::now();
        let worker_count = config.worker_count();

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<M::Job>(config.job_buffer_size());
        let (result_tx, result_rx) = mpsc::channel::<M::Output>(config.result_buffer_size());
        let state = Arc::new(RunState::new());

        reporter.report_started(&source.describe(), worker_count).await;

        // Producer起動
        let producer_handle = spawn_producer(source, work_tx, Arc::clone(&state));

        // Consumer Pool起動（result_txの所有権はワーカーへ移る）
        let consumer_handles = spawn_consumers(
            Arc::clone(&self.matcher),
            work_rx,
            result_tx,
            Arc::clone(&state),
            worker_count,
        );

        // Result Collector起動
        let collector_handle = spawn_result_collector(result_rx, Arc::clone(&reporter));

        // Producer完了を待機
        let records_read = join_task(producer_handle, &state).await.unwrap_or(0);

        // Consumer完了を待機
        let mut records_processed = 0;
        for handle in consumer_handles {
            records_processed += join_task(handle, &state).await.unwrap_or(0);
        }

        // 全ワーカー終了で結果チャンネルが閉じ、Collectorが完了する
        let matches = join_task(collector_handle, &state)
            .await
            .unwrap_or_default();

        if let Err(error) = state.take_result() {
            reporter.report_error(&error.to_string()).await;
            return Err(error);
        }

        let summary = ScanSummary {
            records_read,
            records_processed,
            match_count: matches.len(),
            rows_written: 0,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        tracing::info!(
            "検索完了: 読込={} 処理={} 検出={}",
            summary.records_read,
            summary.records_processed,
            summary.match_count
        );

        Ok(ScanOutcome { matches, summary })
    }
}

/// タスクの終了を待つ（パニック・中断はエラーとして記録する）
async fn join_task<T>(handle: JoinHandle<T>, state: &RunState) -> Option<T> {
    match handle.await {
        Ok(value) => Some(value),
        Err(error) => {
            state.fail(ScanError::from(error));
            None
        }
    }
}
