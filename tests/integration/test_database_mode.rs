// DBモード統合テスト（アンロードツールは偽装）

use crate::fixtures::{FakeUnloadTool, MockUnloadTool, TestWorkspace};
use gaiji_scan::services::{DefaultScanConfig, MemoryReportWriter, NoOpProgressReporter, ReportOptions};
use gaiji_scan::{GlyphCatalog, ScanEngine, ScanError};
use std::sync::Arc;

fn memory_engine(
    workers: usize,
    options: ReportOptions,
) -> ScanEngine<DefaultScanConfig, NoOpProgressReporter, MemoryReportWriter> {
    ScanEngine::new(
        DefaultScanConfig::new(workers),
        NoOpProgressReporter::new(),
        MemoryReportWriter::new(options),
    )
}

#[tokio::test]
async fn test_database_mode_collects_unloaded_rows() {
    let workspace = TestWorkspace::new();
    let tool = FakeUnloadTool::new()
        .with_rows('垠', &["\"2\",\"住所\",\"垠町\"", "\"1\",\"氏名\",\"垠田\",\"太郎\""])
        .with_rows('\u{e000}', &["\"3\",\"備考\",\"\u{e000}\""]);
    let catalog = Arc::new(GlyphCatalog::from_chars(['\u{e000}', '垠', '髙']));
    let engine = memory_engine(3, ReportOptions::new(true, true));

    let summary = engine
        .scan_database(catalog, tool, workspace.root())
        .await
        .unwrap();

    assert_eq!(summary.records_read, 3);
    assert_eq!(summary.match_count, 3);
    assert_eq!(
        engine.writer().contents().unwrap(),
        "コード,文字,識別番号,属性,値\r\n\
         57A0,垠,1,氏名,垠田 | 太郎\r\n\
         57A0,垠,2,住所,垠町\r\n\
         E000,\u{e000},3,備考,\u{e000}\r\n"
    );
    // アンロードファイルは外字コード名で作成される
    assert!(workspace.path("57A0.txt").exists());
    assert!(workspace.path("9AD9.txt").exists());
}

#[tokio::test]
async fn test_database_mode_tool_failure_aborts() {
    let workspace = TestWorkspace::new();
    let tool = FakeUnloadTool::new()
        .with_rows('垠', &["1,A,垠"])
        .failing_on('髙');
    let engine = memory_engine(2, ReportOptions::new(true, false));

    let error = engine
        .scan_database(
            Arc::new(GlyphCatalog::from_chars(['垠', '髙'])),
            tool,
            workspace.root(),
        )
        .await
        .unwrap_err();

    assert!(matches!(error, ScanError::ExternalToolError { .. }));
    assert!(!engine.writer().is_written());
}

#[tokio::test]
async fn test_database_mode_with_mocked_tool() {
    let workspace = TestWorkspace::new();
    let mut tool = MockUnloadTool::new();
    tool.expect_unload()
        .withf(|glyph, path| glyph.character == '垠' && path.ends_with("57A0.txt"))
        .times(1)
        .returning(|_, destination| {
            std::fs::write(destination, "10,X,垠\n").unwrap();
            Ok(())
        });
    let engine = memory_engine(1, ReportOptions::new(false, false));

    engine
        .scan_database(
            Arc::new(GlyphCatalog::from_chars(['垠'])),
            tool,
            workspace.root(),
        )
        .await
        .unwrap();

    assert_eq!(engine.writer().contents().unwrap(), "57A0,垠,10,X\r\n");
}

#[tokio::test]
async fn test_database_mode_empty_catalog() {
    let workspace = TestWorkspace::new();
    let tool = FakeUnloadTool::new();
    let engine = memory_engine(4, ReportOptions::new(true, false));

    let summary = engine
        .scan_database(Arc::new(GlyphCatalog::default()), tool, workspace.root())
        .await
        .unwrap();

    assert_eq!(summary.records_read, 0);
    assert_eq!(engine.writer().contents().unwrap(), "コード,文字,識別番号,属性\r\n");
}
