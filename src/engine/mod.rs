// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod consumer;
pub mod pipeline;
pub mod producer;
pub mod scan_engine;

// 公開API - 主要エンジンクラス
pub use pipeline::ScanPipeline;
pub use scan_engine::ScanEngine;
