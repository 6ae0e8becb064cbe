// 設定管理機能
// ワーカー数・チャンネル容量の既定値と設定ファイル

pub mod implementations;

// 公開API
pub use implementations::{validate_scan_config, DefaultScanConfig, ScanSettings};
