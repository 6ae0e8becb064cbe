use super::common::{build_engine, load_catalog, resolve_options};
use crate::cli::args::FindArgs;
use crate::core::{RecordFormat, ScanSummary};
use anyhow::{Context, Result};

/// find コマンド: 入力ファイルから外字を検索する
pub async fn execute_find(args: FindArgs) -> Result<ScanSummary> {
    let options = resolve_options(&args.common)?;
    let catalog = load_catalog(&args.common)?;
    let format = if args.raw {
        RecordFormat::Line
    } else {
        RecordFormat::Row
    };

    tracing::info!(
        "find: input={} output={} workers={}",
        args.input.display(),
        args.common.output.display(),
        options.workers
    );

    let engine = build_engine(&args.common, &options);
    let summary = engine
        .scan_file(catalog, &args.input, format)
        .await
        .with_context(|| format!("外字の検索に失敗しました: {}", args.input.display()))?;

    Ok(summary)
}
