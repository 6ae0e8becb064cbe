// スキャン処理システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::emitter::ResultEmitter;
use super::error::ScanResult;
use super::run_state::RunState;
use super::types::{Glyph, MatchResult, ScanSummary};
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// スキャンの設定を抽象化するトレイト
#[automock]
pub trait ScanConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// ジョブチャンネルのバッファサイズを取得
    fn job_buffer_size(&self) -> usize;

    /// 結果チャンネルのバッファサイズを取得
    fn result_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

impl ScanConfig for Box<dyn ScanConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn job_buffer_size(&self) -> usize {
        self.as_ref().job_buffer_size()
    }

    fn result_buffer_size(&self) -> usize {
        self.as_ref().result_buffer_size()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, source: &str, worker_count: usize);

    /// 検索結果件数の報告
    async fn report_progress(&self, matches: usize);

    /// エラー発生時の報告
    async fn report_error(&self, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &ScanSummary);
}

#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, source: &str, worker_count: usize) {
        self.as_ref().report_started(source, worker_count).await
    }

    async fn report_progress(&self, matches: usize) {
        self.as_ref().report_progress(matches).await
    }

    async fn report_error(&self, error: &str) {
        self.as_ref().report_error(error).await
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        self.as_ref().report_completed(summary).await
    }
}

/// ジョブの供給元（入力ファイル・外字リストなど）
#[async_trait]
pub trait JobSource: Send + 'static {
    type Job: Send + 'static;

    /// ログ・進捗表示用の説明
    fn describe(&self) -> String;

    /// ジョブを送信し、送信した件数を返す
    ///
    /// キャンセルを検知した場合はエラーなしで終了する。
    async fn produce(
        self,
        jobs: mpsc::Sender<Self::Job>,
        state: Arc<RunState>,
    ) -> ScanResult<usize>;
}

/// ジョブ1件を検索し、結果を送信する
#[async_trait]
pub trait RecordMatcher: Send + Sync + 'static {
    type Job: Send + 'static;
    type Output: Send + 'static;

    async fn match_job(
        &self,
        worker_id: usize,
        job: Self::Job,
        emitter: &ResultEmitter<Self::Output>,
    ) -> ScanResult<()>;
}

/// 外部アンロードユーティリティの抽象化
#[automock]
#[async_trait]
pub trait UnloadTool: Send + Sync {
    /// 指定外字を含むレコードを `destination` にアンロードする
    async fn unload(&self, glyph: &Glyph, destination: &Path) -> ScanResult<()>;
}

/// 検索結果の出力先
#[automock]
pub trait ReportWriter: Send + Sync {
    /// ソート済みの結果を書き出し、出力した行数（ヘッダ除く）を返す
    fn write_report(&self, matches: &[MatchResult]) -> ScanResult<usize>;
}
