// テストデータ作成ヘルパー

use gaiji_scan::encode_utf16be;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 1回のテスト実行で使う一時ディレクトリ
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// 外字リストファイル（UTF-16BE）を作成
    pub fn write_catalog(&self, glyphs: &[char]) -> PathBuf {
        let path = self.path("gaiji.txt");
        std::fs::write(&path, encode_utf16be(glyphs.iter().copied()))
            .expect("Failed to write catalog");
        path
    }

    /// 入力ファイル（UTF-8）を作成
    pub fn write_input(&self, content: &str) -> PathBuf {
        let path = self.path("input.csv");
        std::fs::write(&path, content).expect("Failed to write input");
        path
    }

    /// 出力ファイルの内容（存在しなければNone）
    pub fn read_output(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.path(name)).ok()
    }
}

/// 外字を含まない行をcount件作成
pub fn plain_rows(count: usize) -> String {
    (1..=count)
        .map(|i| format!("{i},ATTR,plain value {i}\n"))
        .collect()
}
