// スキャン処理に関連するデータ型定義

use std::cmp::Ordering;
use std::path::PathBuf;

/// 調査対象の外字
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub character: char,
    /// コードポイントの16進大文字表記（ゼロ埋めなし）
    pub code: String,
}

impl Glyph {
    pub fn new(character: char) -> Self {
        Self {
            character,
            code: format!("{:X}", character as u32),
        }
    }
}

/// 入力レコードの解釈方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// `識別番号,属性,値` のカンマ区切り3列
    #[default]
    Row,
    /// 1行全体を値として扱う自由形式
    Line,
}

/// ファイルモードで配信されるジョブ（入力ファイルの1行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1始まりの行番号
    pub line_no: usize,
    pub text: String,
}

/// DBモードで配信されるジョブ（外字1文字分のアンロード）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnloadJob {
    pub glyph: Glyph,
    pub unload_path: PathBuf,
}

/// 検索結果の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub glyph: Glyph,
    pub identifier: String,
    pub attribute: String,
    pub value: String,
}

impl MatchResult {
    /// レポート出力時の並び順: コード(昇順) > 識別番号(昇順)
    pub fn report_order(&self, other: &Self) -> Ordering {
        self.glyph
            .code
            .cmp(&other.glyph.code)
            .then_with(|| self.identifier.cmp(&other.identifier))
    }

    /// CSV出力用のフィールド列
    pub fn csv_fields(&self, include_value: bool) -> Vec<String> {
        let mut fields = vec![
            self.glyph.code.clone(),
            self.glyph.character.to_string(),
            self.identifier.clone(),
            self.attribute.clone(),
        ];
        if include_value {
            fields.push(self.value.clone());
        }
        fields
    }
}

/// スキャン全体のサマリー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub records_read: usize,
    pub records_processed: usize,
    pub match_count: usize,
    pub rows_written: usize,
    pub elapsed_ms: u64,
}

/// パイプライン実行結果（未ソートの検索結果とサマリー）
#[derive(Debug)]
pub struct ScanOutcome<T = MatchResult> {
    pub matches: Vec<T>,
    pub summary: ScanSummary,
}
