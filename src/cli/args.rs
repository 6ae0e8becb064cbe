use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gaiji_scan")]
#[command(about = "外字（特殊文字）を含むレコードを検索してCSVに出力する")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 入力ファイルから外字を含む行を検索する
    Find(FindArgs),

    /// アンロードユーティリティでDBから外字を含むレコードを抽出する
    Sql(SqlArgs),
}

/// 両モード共通の引数
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// 結果ファイル
    #[arg(short, long)]
    pub output: PathBuf,

    /// 外字リストファイル（UTF-16BE・1行1文字）
    #[arg(short, long)]
    pub gaiji: PathBuf,

    /// 並行処理数（既定: 1）
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// ヘッダ行を出力する
    #[arg(long)]
    pub header: bool,

    /// 値の列を出力する
    #[arg(long)]
    pub value: bool,

    /// 設定ファイル（JSON）
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// 入力ファイル（UTF-8）
    #[arg(short, long)]
    pub input: PathBuf,

    /// 1行全体を値として扱う（カンマ区切り3列として解析しない）
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SqlArgs {
    /// 接続先データベース
    #[arg(long)]
    pub db: String,

    /// 実行するSQL（外字に置き換える %s を含めること）
    #[arg(long)]
    pub sql: String,

    /// アンロードファイルの出力先ディレクトリ
    #[arg(long)]
    pub tmpdir: PathBuf,

    /// アンロードコマンド（既定: rdbunlsql）
    #[arg(long)]
    pub unload_command: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}
