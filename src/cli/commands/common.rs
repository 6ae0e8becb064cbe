use crate::catalog::GlyphCatalog;
use crate::cli::args::CommonArgs;
use crate::core::{ScanConfig, ScanError, ScanResult};
use crate::engine::ScanEngine;
use crate::services::{
    ConsoleProgressReporter, CsvReportWriter, DefaultScanConfig, ReportOptions, ScanSettings,
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// 並行処理数の既定値
pub const DEFAULT_WORKERS: usize = 1;

pub type CliScanEngine = ScanEngine<DefaultScanConfig, ConsoleProgressReporter, CsvReportWriter>;

/// 起動時引数と設定ファイルを合わせた実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub workers: usize,
    pub report: ReportOptions,
    pub settings: ScanSettings,
}

/// 設定ファイルを読み込み、起動時引数を優先して統合する
pub fn resolve_options(args: &CommonArgs) -> ScanResult<ResolvedOptions> {
    let settings = match &args.config {
        Some(path) => ScanSettings::from_json_file(path)?,
        None => ScanSettings::default(),
    };

    let workers = args
        .workers
        .or(settings.worker_count)
        .unwrap_or(DEFAULT_WORKERS);
    if workers == 0 {
        return Err(ScanError::configuration(
            "並行処理数には、1以上の整数を指定してください。",
        ));
    }

    let report = ReportOptions::new(
        args.header || settings.header.unwrap_or(false),
        args.value || settings.value.unwrap_or(false),
    );

    Ok(ResolvedOptions {
        workers,
        report,
        settings,
    })
}

/// 外字リストを読み込む（空でも処理は続行する）
pub fn load_catalog(args: &CommonArgs) -> Result<Arc<GlyphCatalog>> {
    let catalog = GlyphCatalog::load(&args.gaiji)
        .with_context(|| format!("外字リストの読み込みに失敗しました: {}", args.gaiji.display()))?;
    if catalog.is_empty() {
        tracing::warn!("外字リストが空です: {}", args.gaiji.display());
    }
    Ok(Arc::new(catalog))
}

/// CLI用のエンジンを構築する
pub fn build_engine(args: &CommonArgs, options: &ResolvedOptions) -> CliScanEngine {
    let config = DefaultScanConfig::new(options.workers)
        .with_settings(&options.settings)
        .with_worker_count(options.workers);

    let reporter = if config.enable_progress_reporting() {
        ConsoleProgressReporter::new()
    } else {
        ConsoleProgressReporter::quiet()
    };

    ScanEngine::new(
        config,
        reporter,
        CsvReportWriter::new(&args.output, options.report),
    )
}
