// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod matching;
pub mod monitoring;
pub mod report;
pub mod source;
pub mod unload;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultScanConfig, ScanSettings};
pub use matching::{RowMatcher, UnloadMatcher};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use report::{
    sort_matches, spawn_result_collector, CsvReportWriter, MemoryReportWriter, ReportOptions,
};
pub use source::{LineSource, UnloadJobSource};
pub use unload::{RdbUnloadTool, DEFAULT_UNLOAD_COMMAND};
