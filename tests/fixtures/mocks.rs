// テスト用のモック実装

use async_trait::async_trait;
use gaiji_scan::{Glyph, ScanError, ScanResult, UnloadTool};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

// mockallが生成したモックを再エクスポート
pub use gaiji_scan::core::traits::{MockProgressReporter, MockReportWriter, MockUnloadTool};

/// 外字ごとに用意した行をアンロードファイルへ書き出す偽のアンロードツール
#[derive(Debug, Default)]
pub struct FakeUnloadTool {
    rows: HashMap<char, Vec<String>>,
    failing: Option<char>,
    calls: Mutex<Vec<String>>,
}

impl FakeUnloadTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, glyph: char, rows: &[&str]) -> Self {
        self.rows
            .insert(glyph, rows.iter().map(|row| row.to_string()).collect());
        self
    }

    pub fn failing_on(mut self, glyph: char) -> Self {
        self.failing = Some(glyph);
        self
    }

    /// 呼び出された外字コードの一覧（順不同）
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UnloadTool for FakeUnloadTool {
    async fn unload(&self, glyph: &Glyph, destination: &Path) -> ScanResult<()> {
        self.calls.lock().unwrap().push(glyph.code.clone());

        if self.failing == Some(glyph.character) {
            return Err(ScanError::external_tool(
                format!("fake -t {}", destination.display()),
                "exit status: 1",
                "unload failed",
            ));
        }

        let content: String = self
            .rows
            .get(&glyph.character)
            .map(|rows| rows.iter().map(|row| format!("{row}\n")).collect())
            .unwrap_or_default();
        tokio::fs::write(destination, content)
            .await
            .map_err(|e| ScanError::io(destination, e))
    }
}
