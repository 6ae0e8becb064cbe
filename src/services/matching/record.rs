// Record - 入力レコードの解析と外字検索

use crate::catalog::GlyphCatalog;
use crate::core::{MatchResult, RecordFormat, ScanError, ScanResult, SourceLine};

/// 行形式の入力で想定する列数
const ROW_FIELD_COUNT: usize = 3;

/// アンロード結果で最低限必要な列数
const UNLOAD_MIN_FIELD_COUNT: usize = 3;

/// アンロード結果の値列を連結する区切り
const UNLOAD_VALUE_SEPARATOR: &str = " | ";

/// 解析済みの入力レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub attribute: String,
    pub value: String,
}

impl Record {
    /// 入力ファイルの1行を解析
    pub fn parse(line: &SourceLine, format: RecordFormat) -> ScanResult<Self> {
        match format {
            RecordFormat::Row => Self::parse_row(line),
            RecordFormat::Line => Ok(Self {
                identifier: line.line_no.to_string(),
                attribute: String::new(),
                value: line.text.clone(),
            }),
        }
    }

    fn parse_row(line: &SourceLine) -> ScanResult<Self> {
        let fields: Vec<&str> = line.text.split(',').collect();
        if fields.len() != ROW_FIELD_COUNT {
            return Err(ScanError::format(format!(
                "入力ファイルの形式エラー。入力ファイルはカンマ区切り{}列を想定。(line_no={}, 列数={}) line={}",
                ROW_FIELD_COUNT,
                line.line_no,
                fields.len(),
                line.text
            )));
        }

        Ok(Self {
            identifier: trim_quotes(fields[0]).to_string(),
            attribute: trim_quotes(fields[1]).to_string(),
            value: trim_quotes(fields[2]).to_string(),
        })
    }

    /// アンロードファイルの1行を解析
    ///
    /// 3列目以降は ` | ` で連結し、引用符を全て取り除いて値とする。
    pub fn parse_unload_line(text: &str) -> ScanResult<Self> {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() < UNLOAD_MIN_FIELD_COUNT {
            return Err(ScanError::format(format!(
                "アンロードファイルの形式エラー。{}列以上を想定。(列数={}) line={}",
                UNLOAD_MIN_FIELD_COUNT,
                fields.len(),
                text
            )));
        }

        Ok(Self {
            identifier: trim_quotes(fields[0]).to_string(),
            attribute: trim_quotes(fields[1]).to_string(),
            value: fields[2..].join(UNLOAD_VALUE_SEPARATOR).replace('"', ""),
        })
    }
}

fn trim_quotes(field: &str) -> &str {
    field.trim_matches('"')
}

/// 値に含まれる外字ごとに検索結果を生成する（外字リストの順）
pub fn find_matches(catalog: &GlyphCatalog, record: &Record) -> Vec<MatchResult> {
    catalog
        .find_in(&record.value)
        .map(|glyph| MatchResult {
            glyph: glyph.clone(),
            identifier: record.identifier.clone(),
            attribute: record.attribute.clone(),
            value: record.value.clone(),
        })
        .collect()
}
