// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod emitter;
pub mod error;
pub mod run_state;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use emitter::ResultEmitter;
pub use error::{ScanError, ScanResult};
pub use run_state::RunState;
pub use traits::{JobSource, ProgressReporter, RecordMatcher, ReportWriter, ScanConfig, UnloadTool};
pub use traits::{MockProgressReporter, MockReportWriter, MockScanConfig, MockUnloadTool};
pub use types::{
    Glyph, MatchResult, RecordFormat, ScanOutcome, ScanSummary, SourceLine, UnloadJob,
};
