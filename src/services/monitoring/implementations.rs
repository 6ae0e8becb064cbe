// 進捗監視の具象実装

use crate::core::{ProgressReporter, ScanSummary};
use async_trait::async_trait;

/// 進捗表示の間隔（検索結果件数）
const PROGRESS_INTERVAL: usize = 1000;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, source: &str, worker_count: usize) {
        if !self.quiet {
            println!("🔍 検索開始: {source} (並行処理数: {worker_count})");
        }
    }

    async fn report_progress(&self, matches: usize) {
        if !self.quiet && matches % PROGRESS_INTERVAL == 0 {
            println!("📊 検出件数: {matches}");
        }
    }

    async fn report_error(&self, error: &str) {
        if !self.quiet {
            eprintln!("❌ エラー: {error}");
        }
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        if !self.quiet {
            println!(
                "✅ 完了! 読込: {}, 処理: {}, 検出: {} ({}ms)",
                summary.records_read,
                summary.records_processed,
                summary.match_count,
                summary.elapsed_ms
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _source: &str, _worker_count: usize) {}

    async fn report_progress(&self, _matches: usize) {}

    async fn report_error(&self, _error: &str) {}

    async fn report_completed(&self, _summary: &ScanSummary) {}
}
