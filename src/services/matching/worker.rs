// Worker - 入力1行分の検索処理

use super::record::{find_matches, Record};
use crate::catalog::GlyphCatalog;
use crate::core::{
    MatchResult, RecordFormat, RecordMatcher, ResultEmitter, ScanResult, SourceLine,
};
use async_trait::async_trait;
use std::sync::Arc;

/// ファイルモードの検索処理
#[derive(Debug, Clone)]
pub struct RowMatcher {
    catalog: Arc<GlyphCatalog>,
    format: RecordFormat,
}

impl RowMatcher {
    pub fn new(catalog: Arc<GlyphCatalog>, format: RecordFormat) -> Self {
        Self { catalog, format }
    }
}

#[async_trait]
impl RecordMatcher for RowMatcher {
    type Job = SourceLine;
    type Output = MatchResult;

    async fn match_job(
        &self,
        worker_id: usize,
        job: SourceLine,
        emitter: &ResultEmitter<MatchResult>,
    ) -> ScanResult<()> {
        let record = Record::parse(&job, self.format).inspect_err(|error| {
            tracing::error!("[worker{worker_id}] {error}");
        })?;

        for result in find_matches(&self.catalog, &record) {
            if !emitter.emit(result).await {
                break;
            }
        }
        Ok(())
    }
}
