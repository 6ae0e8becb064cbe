// ScanEngine - 依存性注入による外字検索エンジン
// 設定・進捗報告・出力先をコンストラクタで注入する

use super::pipeline::ScanPipeline;
use crate::{
    catalog::GlyphCatalog,
    core::{
        MatchResult, ProgressReporter, RecordFormat, ReportWriter, ScanConfig, ScanOutcome,
        ScanResult, ScanSummary, UnloadTool,
    },
    services::{
        matching::{RowMatcher, UnloadMatcher},
        report::sort_matches,
        source::{LineSource, UnloadJobSource},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

/// 外字検索エンジン
///
/// 検索 → 並べ替え → レポート出力までを管理する。
/// レポートは検索が成功した場合のみ出力される。
pub struct ScanEngine<C, R, W> {
    config: Arc<C>,
    reporter: Arc<R>,
    writer: W,
}

impl<C, R, W> ScanEngine<C, R, W>
where
    C: ScanConfig,
    R: ProgressReporter + 'static,
    W: ReportWriter,
{
    pub fn new(config: C, reporter: R, writer: W) -> Self {
        Self {
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            writer,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// ファイルモード: 入力ファイルの各行から外字を検索する
    pub async fn scan_file(
        &self,
        catalog: Arc<GlyphCatalog>,
        input: impl Into<PathBuf>,
        format: RecordFormat,
    ) -> ScanResult<ScanSummary> {
        let pipeline = ScanPipeline::new(Arc::new(RowMatcher::new(catalog, format)));
        let outcome = pipeline
            .execute(
                LineSource::new(input),
                self.config.as_ref(),
                Arc::clone(&self.reporter),
            )
            .await?;

        self.finish(outcome).await
    }

    /// DBモード: 外字ごとにアンロードした結果を集める
    pub async fn scan_database<T>(
        &self,
        catalog: Arc<GlyphCatalog>,
        tool: T,
        work_dir: impl Into<PathBuf>,
    ) -> ScanResult<ScanSummary>
    where
        T: UnloadTool + 'static,
    {
        let pipeline = ScanPipeline::new(Arc::new(UnloadMatcher::new(Arc::new(tool))));
        let outcome = pipeline
            .execute(
                UnloadJobSource::new(catalog, work_dir),
                self.config.as_ref(),
                Arc::clone(&self.reporter),
            )
            .await?;

        self.finish(outcome).await
    }

    async fn finish(&self, outcome: ScanOutcome<MatchResult>) -> ScanResult<ScanSummary> {
        let ScanOutcome {
            mut matches,
            mut summary,
        } = outcome;

        sort_matches(&mut matches);
        summary.rows_written = match self.writer.write_report(&matches) {
            Ok(rows) => rows,
            Err(error) => {
                self.reporter.report_error(&error.to_string()).await;
                return Err(error);
            }
        };

        self.reporter.report_completed(&summary).await;
        Ok(summary)
    }
}
