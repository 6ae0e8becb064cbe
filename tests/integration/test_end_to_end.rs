// エンドツーエンド統合テスト

use crate::fixtures::{plain_rows, TestWorkspace};
use gaiji_scan::services::{
    CsvReportWriter, DefaultScanConfig, MemoryReportWriter, NoOpProgressReporter, ReportOptions,
};
use gaiji_scan::{GlyphCatalog, RecordFormat, ScanEngine};
use std::sync::Arc;

fn engine_with_file(
    workers: usize,
    output: &std::path::Path,
    options: ReportOptions,
) -> ScanEngine<DefaultScanConfig, NoOpProgressReporter, CsvReportWriter> {
    ScanEngine::new(
        DefaultScanConfig::new(workers),
        NoOpProgressReporter::new(),
        CsvReportWriter::new(output, options),
    )
}

#[tokio::test]
async fn test_single_glyph_report_bytes() {
    let workspace = TestWorkspace::new();
    let catalog_path = workspace.write_catalog(&['垠']);
    let input = workspace.write_input("1,A,text with 垠 inside\n2,B,nothing here\n");
    let output = workspace.path("out.csv");

    let catalog = Arc::new(GlyphCatalog::load(&catalog_path).unwrap());
    let engine = engine_with_file(1, &output, ReportOptions::new(true, true));
    let summary = engine
        .scan_file(catalog, &input, RecordFormat::Row)
        .await
        .unwrap();

    assert_eq!(summary.records_read, 2);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(
        std::fs::read(&output).unwrap(),
        "コード,文字,識別番号,属性,値\r\n57A0,垠,1,A,text with 垠 inside\r\n".as_bytes()
    );
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_abort_scan() {
    let workspace = TestWorkspace::new();
    let input = workspace.path("input.csv");
    std::fs::write(&input, b"1,A,\x82\xa0sjis\n2,B,\xe5\x9e\xa0\n").unwrap();
    let output = workspace.path("out.csv");
    let catalog = Arc::new(GlyphCatalog::from_chars(['垠']));

    let engine = engine_with_file(2, &output, ReportOptions::new(false, false));
    let summary = engine
        .scan_file(catalog, &input, RecordFormat::Row)
        .await
        .unwrap();

    assert_eq!(summary.records_read, 2);
    assert_eq!(summary.records_processed, 2);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "57A0,垠,2,B\r\n");
}

#[tokio::test]
async fn test_many_plain_records_produce_header_only() {
    let workspace = TestWorkspace::new();
    let input = workspace.write_input(&plain_rows(1000));
    let output = workspace.path("out.csv");
    let catalog = Arc::new(GlyphCatalog::from_chars(['垠', '\u{e000}']));

    let engine = engine_with_file(4, &output, ReportOptions::new(true, false));
    let summary = engine
        .scan_file(Arc::clone(&catalog), &input, RecordFormat::Row)
        .await
        .unwrap();

    assert_eq!(summary.records_read, 1000);
    assert_eq!(summary.records_processed, 1000);
    assert_eq!(summary.match_count, 0);
    assert_eq!(
        workspace.read_output("out.csv").unwrap(),
        "コード,文字,識別番号,属性\r\n"
    );

    // ヘッダなしなら空ファイル
    let engine = engine_with_file(4, &output, ReportOptions::new(false, false));
    engine
        .scan_file(catalog, &input, RecordFormat::Row)
        .await
        .unwrap();
    assert_eq!(workspace.read_output("out.csv").unwrap(), "");
}

#[tokio::test]
async fn test_distinct_glyphs_yield_one_result_each() {
    let workspace = TestWorkspace::new();
    // 3種類の外字がそれぞれ複数回現れる
    let input = workspace.write_input("1,A,垠垠髙\u{e000}髙垠\n");
    let catalog = Arc::new(GlyphCatalog::from_chars(['垠', '髙', '\u{e000}', '𠀋']));
    let engine = ScanEngine::new(
        DefaultScanConfig::new(2),
        NoOpProgressReporter::new(),
        MemoryReportWriter::new(ReportOptions::new(false, false)),
    );

    let summary = engine
        .scan_file(catalog, &input, RecordFormat::Row)
        .await
        .unwrap();

    assert_eq!(summary.match_count, 3);
    assert_eq!(
        engine.writer().contents().unwrap(),
        "57A0,垠,1,A\r\n9AD9,髙,1,A\r\nE000,\u{e000},1,A\r\n"
    );
}

#[tokio::test]
async fn test_report_is_identical_across_worker_counts() {
    let workspace = TestWorkspace::new();
    let mut content = String::new();
    for i in 1..=500 {
        let value = match i % 4 {
            0 => format!("垠{i}"),
            1 => format!("\u{e000}{i}"),
            2 => format!("垠\u{e000}{i}"),
            _ => format!("plain{i}"),
        };
        content.push_str(&format!("{i:04},ATTR{i},{value}\n"));
    }
    let input = workspace.write_input(&content);
    let catalog = Arc::new(GlyphCatalog::from_chars(['垠', '\u{e000}']));

    let mut reports = Vec::new();
    for workers in [1, 2, 8] {
        let engine = ScanEngine::new(
            DefaultScanConfig::new(workers)
                .with_job_buffer_size(3)
                .with_result_buffer_size(2),
            NoOpProgressReporter::new(),
            MemoryReportWriter::new(ReportOptions::new(true, true)),
        );
        engine
            .scan_file(Arc::clone(&catalog), &input, RecordFormat::Row)
            .await
            .unwrap();
        reports.push(engine.writer().contents().unwrap());
    }

    assert_eq!(reports[0], reports[1]);
    assert_eq!(reports[0], reports[2]);
    // ヘッダ + 垠(250件) + E000(250件)
    assert_eq!(reports[0].matches("\r\n").count(), 1 + 250 + 250);
}

#[tokio::test]
async fn test_raw_format_scans_whole_lines() {
    let workspace = TestWorkspace::new();
    let input = workspace.write_input("no glyph\nfree, form 垠, text\n");
    let catalog = Arc::new(GlyphCatalog::from_chars(['垠']));
    let engine = ScanEngine::new(
        DefaultScanConfig::new(2),
        NoOpProgressReporter::new(),
        MemoryReportWriter::new(ReportOptions::new(false, true)),
    );

    engine
        .scan_file(catalog, &input, RecordFormat::Line)
        .await
        .unwrap();

    assert_eq!(
        engine.writer().contents().unwrap(),
        "57A0,垠,2,,\"free, form 垠, text\"\r\n"
    );
}

#[tokio::test]
async fn test_empty_catalog_produces_no_matches() {
    let workspace = TestWorkspace::new();
    let catalog_path = workspace.write_catalog(&[]);
    let input = workspace.write_input("1,A,垠\n");

    let catalog = Arc::new(GlyphCatalog::load(&catalog_path).unwrap());
    assert!(catalog.is_empty());

    let engine = ScanEngine::new(
        DefaultScanConfig::new(1),
        NoOpProgressReporter::new(),
        MemoryReportWriter::new(ReportOptions::new(false, false)),
    );
    let summary = engine
        .scan_file(catalog, &input, RecordFormat::Row)
        .await
        .unwrap();

    assert_eq!(summary.match_count, 0);
    assert_eq!(engine.writer().contents().unwrap(), "");
}
