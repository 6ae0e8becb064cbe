// テストユーティリティとモック実装
// 各機能のテスト用のモック実装とヘルパー

pub mod mocks;
pub mod test_data;

// 公開API
pub use mocks::*;
pub use test_data::*;
