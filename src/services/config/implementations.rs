// 設定管理の具象実装

use crate::core::{ScanConfig, ScanError, ScanResult};
use serde::Deserialize;
use std::path::Path;

/// ワーカー1つあたりのジョブチャンネル容量
const JOB_BUFFER_PER_WORKER: usize = 100;
/// ワーカー1つあたりの結果チャンネル容量
const RESULT_BUFFER_PER_WORKER: usize = 10;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultScanConfig {
    worker_count: usize,
    job_buffer_size: Option<usize>,
    result_buffer_size: Option<usize>,
    enable_progress: bool,
}

impl DefaultScanConfig {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            job_buffer_size: None,
            result_buffer_size: None,
            enable_progress: true,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_job_buffer_size(mut self, size: usize) -> Self {
        self.job_buffer_size = Some(size);
        self
    }

    pub fn with_result_buffer_size(mut self, size: usize) -> Self {
        self.result_buffer_size = Some(size);
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    /// 設定ファイルの値で上書きする（未指定の項目は現在値のまま）
    pub fn with_settings(mut self, settings: &ScanSettings) -> Self {
        if let Some(worker_count) = settings.worker_count {
            self.worker_count = worker_count;
        }
        if settings.job_buffer_size.is_some() {
            self.job_buffer_size = settings.job_buffer_size;
        }
        if settings.result_buffer_size.is_some() {
            self.result_buffer_size = settings.result_buffer_size;
        }
        if let Some(progress) = settings.progress {
            self.enable_progress = progress;
        }
        self
    }
}

impl Default for DefaultScanConfig {
    fn default() -> Self {
        Self::new(num_cpus::get().max(1))
    }
}

impl ScanConfig for DefaultScanConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn job_buffer_size(&self) -> usize {
        self.job_buffer_size
            .unwrap_or_else(|| self.worker_count.saturating_mul(JOB_BUFFER_PER_WORKER))
    }

    fn result_buffer_size(&self) -> usize {
        self.result_buffer_size
            .unwrap_or_else(|| self.worker_count.saturating_mul(RESULT_BUFFER_PER_WORKER))
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// パイプライン開始前の設定検証
pub fn validate_scan_config<C: ScanConfig + ?Sized>(config: &C) -> ScanResult<()> {
    if config.worker_count() == 0 {
        return Err(ScanError::configuration(format!(
            "並行処理数には、1以上の整数を指定してください。(workers={})",
            config.worker_count()
        )));
    }
    if config.job_buffer_size() == 0 {
        return Err(ScanError::configuration(
            "ジョブバッファサイズは1以上である必要があります",
        ));
    }
    if config.result_buffer_size() == 0 {
        return Err(ScanError::configuration(
            "結果バッファサイズは1以上である必要があります",
        ));
    }
    Ok(())
}

/// 設定ファイル（JSON）の内容
///
/// 全項目省略可。起動時引数で指定された値が優先される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    pub worker_count: Option<usize>,
    pub job_buffer_size: Option<usize>,
    pub result_buffer_size: Option<usize>,
    pub progress: Option<bool>,
    pub header: Option<bool>,
    pub value: Option<bool>,
    pub unload_command: Option<String>,
}

impl ScanSettings {
    pub fn from_json_file(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            ScanError::configuration(format!("設定ファイルの解析に失敗しました({}): {e}", path.display()))
        })
    }
}
