// レポート機能
// 検索結果の収集・並べ替え・CSV出力

pub mod collector;
pub mod writer;

// 公開API
pub use collector::spawn_result_collector;
pub use writer::{
    sort_matches, write_csv, CsvReportWriter, MemoryReportWriter, ReportOptions, REPORT_HEADER,
};
