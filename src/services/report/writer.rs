// Writer - 検索結果のCSV出力

use crate::core::{MatchResult, ReportWriter, ScanError, ScanResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// レポートのヘッダ（値列は出力する場合のみ）
pub static REPORT_HEADER: [&str; 5] = ["コード", "文字", "識別番号", "属性", "値"];

/// 並び順: コード(昇順) > 識別番号(昇順)、同順位は受信順を保つ
pub fn sort_matches(matches: &mut [MatchResult]) {
    matches.sort_by(MatchResult::report_order);
}

/// レポートの出力オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub include_header: bool,
    pub include_value: bool,
}

impl ReportOptions {
    pub fn new(include_header: bool, include_value: bool) -> Self {
        Self {
            include_header,
            include_value,
        }
    }

    fn header(&self) -> &'static [&'static str] {
        if self.include_value {
            &REPORT_HEADER
        } else {
            &REPORT_HEADER[..4]
        }
    }
}

/// CSV（UTF-8・CRLF）で書き出す
///
/// 返り値は書き出したデータ行数（ヘッダ除く）。
pub fn write_csv<W: Write>(
    output: W,
    matches: &[MatchResult],
    options: ReportOptions,
) -> csv::Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);

    if options.include_header {
        writer.write_record(options.header())?;
    }
    for result in matches {
        writer.write_record(result.csv_fields(options.include_value))?;
    }
    writer.flush()?;

    Ok(matches.len())
}

/// ファイルへのCSVレポート出力
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
    options: ReportOptions,
}

impl CsvReportWriter {
    pub fn new(path: impl Into<PathBuf>, options: ReportOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&self, matches: &[MatchResult]) -> ScanResult<usize> {
        let file =
            std::fs::File::create(&self.path).map_err(|e| ScanError::io(&self.path, e))?;
        let rows = write_csv(file, matches, self.options)
            .map_err(|e| ScanError::report(&self.path, e))?;

        tracing::info!("結果ファイル出力: {} 件 ({})", rows, self.path.display());
        Ok(rows)
    }
}

/// メモリ上にCSVを保持する出力先（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryReportWriter {
    options: ReportOptions,
    output: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryReportWriter {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            output: Arc::new(Mutex::new(None)),
        }
    }

    /// 出力済みかどうか（エラー時は出力されない）
    pub fn is_written(&self) -> bool {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// 出力内容のバイト列
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 出力内容の文字列
    pub fn contents(&self) -> Option<String> {
        self.bytes()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl ReportWriter for MemoryReportWriter {
    fn write_report(&self, matches: &[MatchResult]) -> ScanResult<usize> {
        let mut buffer = Vec::new();
        let rows = write_csv(&mut buffer, matches, self.options)
            .map_err(|e| ScanError::report("<memory>", e))?;

        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = Some(buffer);
        Ok(rows)
    }
}
