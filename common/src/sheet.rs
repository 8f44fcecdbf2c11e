//! 公開CSVのパース
//!
//! 最小限のCSVパーサ。引用符付きフィールド、引用符内のカンマ・改行、
//! "" エスケープに対応し、空行は読み飛ばす。1行目をヘッダーとして
//! 各レコードを `MenuRow` に変換する。

use crate::error::{Error, Result};
use crate::row::MenuRow;

/// CSV文字列をメニュー行に変換する（1行目はヘッダー）
pub fn parse_menu_csv(content: &str) -> Result<Vec<MenuRow>> {
    let mut records = parse_records(content).into_iter();
    let header = records
        .next()
        .ok_or_else(|| Error::Csv("ヘッダー行がありません".into()))?;

    let mut rows = Vec::new();
    for record in records {
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut row = MenuRow::new();
        for (key, value) in header.iter().zip(record.iter()) {
            row.insert(key, value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// レコード分割（引用符対応）
fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(c),
            }
        }
    }

    // 改行で終わらない最終レコード
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
