// 外字（特殊文字）検索ツール
//
// 外字リストの各文字を、入力ファイルの行またはDBのアンロード結果から
// 並列に検索し、ソート済みのCSVレポートを出力する。

pub mod catalog;
pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

// 主要な型をクレートルートから利用できるようにする
pub use crate::catalog::{encode_utf16be, GlyphCatalog};
pub use crate::core::{
    Glyph, MatchResult, ProgressReporter, RecordFormat, ReportWriter, ScanConfig, ScanError,
    ScanResult, ScanSummary, UnloadTool,
};
pub use crate::engine::{ScanEngine, ScanPipeline};
