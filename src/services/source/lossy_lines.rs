// LossyLines - 不正なUTF-8を含む行も読み飛ばさずに返す行リーダー

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// 行単位の非同期リーダー
///
/// UTF-8として不正なバイト列は U+FFFD に置き換える。行末の `\n` / `\r\n` は除去する。
pub struct LossyLines<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// 次の行を読む。EOFなら `None`
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
            return Ok(None);
        }

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}
