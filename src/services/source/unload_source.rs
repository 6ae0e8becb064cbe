// UnloadJobSource - 外字1文字ごとのアンロードジョブを配信する

use crate::catalog::GlyphCatalog;
use crate::core::{JobSource, RunState, ScanResult, UnloadJob};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// DBモードのジョブ供給元
#[derive(Debug, Clone)]
pub struct UnloadJobSource {
    catalog: Arc<GlyphCatalog>,
    work_dir: PathBuf,
}

impl UnloadJobSource {
    pub fn new(catalog: Arc<GlyphCatalog>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            work_dir: work_dir.into(),
        }
    }

    /// 外字リスト順のジョブ一覧
    ///
    /// アンロード先は `<work_dir>/<コード>.txt`。同じ外字が重複している場合は
    /// ワーカー間でファイルが衝突しないよう `<コード>_<n>.txt` とする。
    pub fn jobs(&self) -> Vec<UnloadJob> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        self.catalog
            .iter()
            .map(|glyph| {
                let count = seen.entry(glyph.code.as_str()).or_insert(0);
                let file_name = if *count == 0 {
                    format!("{}.txt", glyph.code)
                } else {
                    format!("{}_{}.txt", glyph.code, count)
                };
                *count += 1;

                UnloadJob {
                    glyph: glyph.clone(),
                    unload_path: self.work_dir.join(file_name),
                }
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for UnloadJobSource {
    type Job = UnloadJob;

    fn describe(&self) -> String {
        format!("外字 {} 文字 (tmpdir={})", self.catalog.len(), self.work_dir.display())
    }

    async fn produce(
        self,
        jobs: mpsc::Sender<UnloadJob>,
        state: Arc<RunState>,
    ) -> ScanResult<usize> {
        let mut sent = 0;
        for job in self.jobs() {
            if state.is_cancelled() {
                break;
            }
            tokio::select! {
                biased;
                _ = state.cancelled() => break,
                result = jobs.send(job) => {
                    if result.is_err() {
                        break;
                    }
                }
            }
            sent += 1;
        }
        Ok(sent)
    }
}
