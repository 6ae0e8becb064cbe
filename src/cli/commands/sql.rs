use super::common::{build_engine, load_catalog, resolve_options};
use crate::cli::args::SqlArgs;
use crate::core::{ScanError, ScanSummary};
use crate::services::{RdbUnloadTool, DEFAULT_UNLOAD_COMMAND};
use anyhow::{Context, Result};

/// sql コマンド: 外字ごとにDBからアンロードして検索結果にする
pub async fn execute_sql(args: SqlArgs) -> Result<ScanSummary> {
    let options = resolve_options(&args.common)?;

    if !args.tmpdir.is_dir() {
        return Err(ScanError::configuration(format!(
            "アンロードファイルの出力先ディレクトリが存在しません: {}",
            args.tmpdir.display()
        ))
        .into());
    }

    let program = args
        .unload_command
        .clone()
        .or_else(|| options.settings.unload_command.clone())
        .unwrap_or_else(|| DEFAULT_UNLOAD_COMMAND.to_string());
    let tool = RdbUnloadTool::new(program, args.db.as_str(), args.sql.as_str())?;

    let catalog = load_catalog(&args.common)?;

    tracing::info!(
        "sql: db={} tmpdir={} output={} workers={}",
        args.db,
        args.tmpdir.display(),
        args.common.output.display(),
        options.workers
    );

    let engine = build_engine(&args.common, &options);
    let summary = engine
        .scan_database(catalog, tool, &args.tmpdir)
        .await
        .with_context(|| format!("DBからの外字検索に失敗しました: db={}", args.db))?;

    Ok(summary)
}
