// スキャン処理専用のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// スキャン処理固有のエラー型
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("デコードエラー: {path} - {message}")]
    DecodeError { path: PathBuf, message: String },

    #[error("形式エラー: {message}")]
    FormatError { message: String },

    #[error("入出力エラー: {path} - {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("外部コマンドエラー: {command} (終了状態: {status}) {stderr}")]
    ExternalToolError {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("レポート出力エラー: {path} - {source}")]
    ReportError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ScanError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// デコードエラーの作成
    pub fn decode(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::DecodeError {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// 形式エラーの作成
    pub fn format(message: impl Into<String>) -> Self {
        Self::FormatError {
            message: message.into(),
        }
    }

    /// 入出力エラーの作成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 外部コマンドエラーの作成
    pub fn external_tool(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ExternalToolError {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::ReportError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// プロセス終了コード
    ///
    /// 起動時引数・設定の誤りは 2、それ以外の失敗は 1。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigurationError { .. } => 2,
            _ => 1,
        }
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(error: tokio::task::JoinError) -> Self {
        ScanError::TaskError { source: error }
    }
}

/// スキャン処理の結果型
pub type ScanResult<T> = std::result::Result<T, ScanError>;
