use clap::Parser;
use gaiji_scan::cli::{execute_find, execute_sql, Cli, Commands};
use gaiji_scan::ScanError;
use tracing_subscriber::EnvFilter;

/// 失敗時の終了コード（ScanError以外）
const EXIT_FAILURE: i32 = 1;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Find(args) => execute_find(args).await,
        Commands::Sql(args) => execute_sql(args).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "正常終了: 出力件数={} ({}ms)",
                summary.rows_written,
                summary.elapsed_ms
            );
        }
        Err(error) => {
            let exit_code = error
                .downcast_ref::<ScanError>()
                .map(ScanError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            eprintln!("❌ エラー: {error:#}");
            std::process::exit(exit_code);
        }
    }
}
