// ResultEmitter - ワーカーから結果チャンネルへの送信口

use super::run_state::RunState;
use std::sync::Arc;
use tokio::sync::mpsc;

/// キャンセルを監視しながら検索結果を送信する
///
/// 結果チャンネルが満杯でも、キャンセルされれば即座に送信を諦める。
#[derive(Debug)]
pub struct ResultEmitter<T> {
    result_tx: mpsc::Sender<T>,
    state: Arc<RunState>,
}

impl<T> Clone for ResultEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            result_tx: self.result_tx.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Send> ResultEmitter<T> {
    pub fn new(result_tx: mpsc::Sender<T>, state: Arc<RunState>) -> Self {
        Self { result_tx, state }
    }

    /// 結果を送信する
    ///
    /// キャンセル済み、または受信側が閉じている場合は `false`。
    pub async fn emit(&self, result: T) -> bool {
        if self.state.is_cancelled() {
            return false;
        }
        tokio::select! {
            biased;
            _ = self.state.cancelled() => false,
            sent = self.result_tx.send(result) => sent.is_ok(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.is_cancelled()
    }
}
