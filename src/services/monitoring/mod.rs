// 進捗監視機能
// 検索開始・検出件数・エラー・完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
