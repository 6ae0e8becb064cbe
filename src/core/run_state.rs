// RunState - 実行全体で共有するキャンセル状態
//
// 最初に記録されたエラーだけを保持し、同時に全タスクへキャンセルを通知する。

use super::error::{ScanError, ScanResult};
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

/// 実行状態（最初のエラーが勝つ一回書き込みセル + キャンセルトークン）
#[derive(Debug, Default)]
pub struct RunState {
    token: CancellationToken,
    first_error: Mutex<Option<ScanError>>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 失敗を記録してキャンセルを発火する
    ///
    /// 最初の呼び出しのみエラーが保持され `true` を返す。以降は破棄される。
    pub fn fail(&self, error: ScanError) -> bool {
        let recorded = {
            let mut slot = self
                .first_error
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if slot.is_none() {
                *slot = Some(error);
                true
            } else {
                tracing::debug!("後続のエラーを破棄: {error}");
                false
            }
        };
        self.token.cancel();
        recorded
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// キャンセルされるまで待機する
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    pub fn has_failed(&self) -> bool {
        self.first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// 実行結果を確定する（記録済みのエラーがあれば取り出して返す）
    pub fn take_result(&self) -> ScanResult<()> {
        match self
            .first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
