// 外字リスト - UTF-16 の外字定義ファイルを読み込む

use crate::core::{Glyph, ScanError, ScanResult};
use std::path::Path;

const BOM_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_LE: [u8; 2] = [0xFF, 0xFE];

/// 調査対象の外字リスト（読み込み後は読み取り専用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphCatalog {
    glyphs: Vec<Glyph>,
}

impl GlyphCatalog {
    /// 外字リストファイルを読み込む
    ///
    /// ファイルは UTF-16BE・1行1文字。BOM が付いていればそのエンディアンを優先する。
    /// 空行は入力ミスとみなしてエラーにする。
    pub fn load(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ScanError::io(path, e))?;
        let catalog = Self::from_utf16_bytes(path, &bytes)?;

        tracing::info!(
            "外字リスト読み込み完了: {} 件 ({})",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// UTF-16 のバイト列から外字リストを作成する
    pub fn from_utf16_bytes(path: &Path, bytes: &[u8]) -> ScanResult<Self> {
        let text = decode_utf16(path, bytes)?;

        let mut glyphs = Vec::new();
        for (index, line) in text.lines().enumerate() {
            // 1文字目だけを使う
            let Some(character) = line.chars().next() else {
                return Err(ScanError::format(format!(
                    "空白行が存在します(file={}, line={})",
                    path.display(),
                    index + 1
                )));
            };
            glyphs.push(Glyph::new(character));
        }

        Ok(Self { glyphs })
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            glyphs: chars.into_iter().map(Glyph::new).collect(),
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `text` に含まれる外字を列挙する（出現回数に関係なく外字ごとに1回）
    pub fn find_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Glyph> + 'a {
        self.glyphs
            .iter()
            .filter(move |glyph| text.contains(glyph.character))
    }
}

fn decode_utf16(path: &Path, bytes: &[u8]) -> ScanResult<String> {
    let (body, little_endian) = match bytes {
        [a, b, rest @ ..] if [*a, *b] == BOM_BE => (rest, false),
        [a, b, rest @ ..] if [*a, *b] == BOM_LE => (rest, true),
        _ => (bytes, false),
    };

    if body.len() % 2 != 0 {
        return Err(ScanError::decode(
            path,
            format!("UTF-16 として不正なバイト数です(bytes={})", body.len()),
        ));
    }

    let units = body.chunks_exact(2).map(|pair| {
        if little_endian {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from_be_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| {
            ScanError::decode(
                path,
                format!("対になっていないサロゲートです(0x{:04X})", e.unpaired_surrogate()),
            )
        })
}

/// 外字リストファイル形式（UTF-16BE・BOMなし・1行1文字）に変換する
pub fn encode_utf16be(chars: impl IntoIterator<Item = char>) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut buf = [0u16; 2];
    for ch in chars {
        for unit in ch.encode_utf16(&mut buf).iter().chain(&[u16::from(b'\n')]) {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
    }
    bytes
}
