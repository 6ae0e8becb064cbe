// RdbUnloadTool - rdbunlsql によるアンロード

use crate::core::{Glyph, ScanError, ScanResult, UnloadTool};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// 既定のアンロードコマンド
pub const DEFAULT_UNLOAD_COMMAND: &str = "rdbunlsql";

/// SQLテンプレート中の外字プレースホルダ
pub const GLYPH_PLACEHOLDER: &str = "%s";

/// 外部のアンロードユーティリティを呼び出す
///
/// `<program> -d <database> -s <SQL> -t <出力ファイル>` の形で起動する。
#[derive(Debug, Clone)]
pub struct RdbUnloadTool {
    program: String,
    database: String,
    sql_template: String,
}

impl RdbUnloadTool {
    /// SQLテンプレートに `%s` が含まれない場合はエラー
    pub fn new(
        program: impl Into<String>,
        database: impl Into<String>,
        sql_template: impl Into<String>,
    ) -> ScanResult<Self> {
        let sql_template = sql_template.into();
        if !sql_template.contains(GLYPH_PLACEHOLDER) {
            return Err(ScanError::configuration(format!(
                "SQLには外字に置き換える{GLYPH_PLACEHOLDER}を含めてください: {sql_template}"
            )));
        }

        Ok(Self {
            program: program.into(),
            database: database.into(),
            sql_template,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// 外字を埋め込んだSQLを作成する
    pub fn sql_for(&self, glyph: &Glyph) -> String {
        render_sql(&self.sql_template, glyph.character)
    }
}

/// `%s` を外字に、`%%` を `%` に置き換える（LIKE句で `%` を書けるように）
fn render_sql(template: &str, character: char) -> String {
    let mut rendered = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            rendered.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                rendered.push(character);
            }
            Some('%') => {
                chars.next();
                rendered.push('%');
            }
            _ => rendered.push('%'),
        }
    }
    rendered
}

#[async_trait]
impl UnloadTool for RdbUnloadTool {
    async fn unload(&self, glyph: &Glyph, destination: &Path) -> ScanResult<()> {
        let sql = self.sql_for(glyph);
        let command_line = format!(
            "{} -d {} -s \"{}\" -t {}",
            self.program,
            self.database,
            sql,
            destination.display()
        );
        tracing::debug!("[unload] cmd={command_line}");

        let output = Command::new(&self.program)
            .arg("-d")
            .arg(&self.database)
            .arg("-s")
            .arg(&sql)
            .arg("-t")
            .arg(destination)
            .output()
            .await
            .map_err(|e| ScanError::external_tool(&command_line, "起動失敗", e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!("[unload] std-out={}", stdout.trim_end());
        tracing::debug!("[unload] std-err={}", stderr.trim_end());

        if !output.status.success() {
            return Err(ScanError::external_tool(
                command_line,
                output.status.to_string(),
                stderr.trim_end(),
            ));
        }
        Ok(())
    }
}
