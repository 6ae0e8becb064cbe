// UnloadWorker - 外字1文字分のアンロードと結果読み込み

use super::record::Record;
use crate::core::{
    MatchResult, RecordMatcher, ResultEmitter, ScanError, ScanResult, UnloadJob, UnloadTool,
};
use crate::services::source::LossyLines;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::BufReader;

/// DBモードの検索処理
///
/// 検索対象の外字はジョブごとに固定で、アンロード結果の全行がその外字の検出結果になる。
pub struct UnloadMatcher<T> {
    tool: Arc<T>,
}

impl<T: UnloadTool> UnloadMatcher<T> {
    pub fn new(tool: Arc<T>) -> Self {
        Self { tool }
    }
}

/// 前回のアンロード結果を削除する（存在しなければ何もしない）
async fn remove_stale_unload(path: &Path) -> ScanResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScanError::io(path, e)),
    }
}

#[async_trait]
impl<T: UnloadTool + 'static> RecordMatcher for UnloadMatcher<T> {
    type Job = UnloadJob;
    type Output = MatchResult;

    async fn match_job(
        &self,
        worker_id: usize,
        job: UnloadJob,
        emitter: &ResultEmitter<MatchResult>,
    ) -> ScanResult<()> {
        let path = job.unload_path.as_path();
        tracing::debug!("[worker{worker_id}] unload: {} -> {}", job.glyph.code, path.display());

        remove_stale_unload(path).await?;
        self.tool.unload(&job.glyph, path).await?;

        let file = File::open(path).await.map_err(|e| ScanError::io(path, e))?;
        let mut lines = LossyLines::new(BufReader::new(file));

        while let Some(line) = lines.next_line().await.map_err(|e| ScanError::io(path, e))? {
            if emitter.is_cancelled() {
                break;
            }

            let record = Record::parse_unload_line(&line)?;
            let result = MatchResult {
                glyph: job.glyph.clone(),
                identifier: record.identifier,
                attribute: record.attribute,
                value: record.value,
            };
            if !emitter.emit(result).await {
                break;
            }
        }
        Ok(())
    }
}
