// LineSource - 入力ファイルを1行ずつ配信する

use super::lossy_lines::LossyLines;
use crate::core::{JobSource, RunState, ScanError, ScanResult, SourceLine};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::BufReader;
use tokio::sync::mpsc;

/// 入力ファイル（UTF-8・行区切り）のジョブ供給元
///
/// 不正なUTF-8を含む行も置換文字に置き換えて配信する。
#[derive(Debug, Clone)]
pub struct LineSource {
    path: PathBuf,
}

impl LineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSource for LineSource {
    type Job = SourceLine;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn produce(
        self,
        jobs: mpsc::Sender<SourceLine>,
        state: Arc<RunState>,
    ) -> ScanResult<usize> {
        let file = File::open(&self.path)
            .await
            .map_err(|e| ScanError::io(&self.path, e))?;
        let mut lines = LossyLines::new(BufReader::new(file));

        let mut line_no = 0;
        let mut sent = 0;
        loop {
            if state.is_cancelled() {
                tracing::debug!("[producer] キャンセル検知 (line_no={line_no})");
                break;
            }

            let next = tokio::select! {
                biased;
                _ = state.cancelled() => break,
                next = lines.next_line() => next.map_err(|e| ScanError::io(&self.path, e))?,
            };
            let Some(text) = next else {
                break;
            };
            line_no += 1;

            let job = SourceLine { line_no, text };
            tokio::select! {
                biased;
                _ = state.cancelled() => break,
                result = jobs.send(job) => {
                    if result.is_err() {
                        // 受信側が全て終了している
                        break;
                    }
                }
            }
            sent += 1;
        }

        Ok(sent)
    }
}
