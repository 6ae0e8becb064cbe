// アンロード機能
// 外部ユーティリティでDBから外字を含むレコードを抽出

pub mod rdb;

// 公開API
pub use rdb::{RdbUnloadTool, DEFAULT_UNLOAD_COMMAND};
