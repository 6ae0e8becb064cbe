// 検索機能
// 入力レコードの解析と外字の検出

pub mod record;
pub mod unload_worker;
pub mod worker;

// 公開API
pub use record::{find_matches, Record};
pub use unload_worker::UnloadMatcher;
pub use worker::RowMatcher;
