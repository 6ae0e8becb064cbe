// ジョブ供給機能
// 入力ファイルの行、または外字ごとのアンロードジョブを配信

pub mod line_source;
pub mod lossy_lines;
pub mod unload_source;

// 公開API
pub use line_source::LineSource;
pub use lossy_lines::LossyLines;
pub use unload_source::UnloadJobSource;
