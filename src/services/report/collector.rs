// Collector - 検索結果の収集

use crate::core::ProgressReporter;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collector: 結果チャンネルが閉じるまで全ての結果を受信する
///
/// キャンセル後も受信を続け、送信中のワーカーを待たせない。
pub fn spawn_result_collector<T, R>(
    mut result_rx: mpsc::Receiver<T>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Vec<T>>
where
    T: Send + 'static,
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut results = Vec::new();

        while let Some(result) = result_rx.recv().await {
            results.push(result);
            reporter.report_progress(results.len()).await;
        }

        tracing::debug!("[collector] END : 受信件数={}", results.len());
        results
    })
}
