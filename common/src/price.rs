//! 価格表記の整形
//!
//! "グラス600/ボトル2,970" のような価格文字列を言語別の表示行に
//! 変換する。数字の並びには通貨記号￥を付けるが、容量表記
//! （500ml等）は価格ではないので付けない。

use crate::i18n::translate_serving_terms;
use crate::lang::Lang;
use serde::Serialize;

/// 整形済み価格
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceText {
    /// 表示行。"/"区切りの各セグメントが1行になる。
    pub lines: Vec<String>,
    /// 元の文字列に"/"を含むか。描画側はtrueなら行ごとのブロック、
    /// falseなら単一の段落として扱う。
    pub grouped: bool,
}

impl PriceText {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// 価格文字列を言語別に整形する。空入力は空の結果。決して失敗しない。
pub fn format_price(raw: &str, lang: Lang) -> PriceText {
    let raw = raw.trim();
    if raw.is_empty() {
        return PriceText::default();
    }

    let grouped = raw.contains('/');
    let lines = raw
        .split('/')
        .map(str::trim)
        // 余分な"/"による空セグメントは行を出さない
        .filter(|segment| !segment.is_empty())
        .map(|segment| tag_currency(&translate_serving_terms(lang, segment)))
        .collect();

    PriceText { lines, grouped }
}

/// 数字の並び（カンマ区切り含む）の先頭に￥を付ける。
/// 直後（空白を挟んでもよい）に容量単位 ml が続く並びは価格と
/// みなさない。この例外は単一価格・複数価格の両方に適用する。
fn tag_currency(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == ',') {
                j += 1;
            }
            if !followed_by_volume_unit(&chars[j..]) {
                out.push('￥');
            }
            out.extend(&chars[i..j]);
            i = j;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn followed_by_volume_unit(rest: &[char]) -> bool {
    let mut k = 0;
    while k < rest.len() && rest[k].is_whitespace() {
        k += 1;
    }
    rest[k..].starts_with(&['m', 'l'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_price() {
        let price = format_price("730", Lang::Jp);
        assert_eq!(price.lines, vec!["￥730"]);
        assert!(!price.grouped);
    }

    #[test]
    fn test_multi_price() {
        let price = format_price("730/2970", Lang::Jp);
        assert_eq!(price.lines, vec!["￥730", "￥2970"]);
        assert!(price.grouped);
    }

    #[test]
    fn test_empty_price() {
        let price = format_price("", Lang::Jp);
        assert!(price.is_empty());
        let price = format_price("   ", Lang::Jp);
        assert!(price.is_empty());
    }

    #[test]
    fn test_stray_slash() {
        // 空セグメントは行を出さず、失敗もしない
        let price = format_price("730/", Lang::Jp);
        assert_eq!(price.lines, vec!["￥730"]);
        assert!(price.grouped);
    }

    #[test]
    fn test_comma_grouping() {
        let price = format_price("3,900", Lang::Jp);
        assert_eq!(price.lines, vec!["￥3,900"]);
    }

    #[test]
    fn test_serving_terms_translated() {
        let price = format_price("グラス600/ボトル2,970", Lang::En);
        assert_eq!(price.lines, vec!["Glass￥600", "Bottle￥2,970"]);

        let price = format_price("グラス600/ボトル2,970", Lang::Zh);
        assert_eq!(price.lines, vec!["杯￥600", "瓶￥2,970"]);

        let price = format_price("グラス600/ボトル2,970", Lang::Jp);
        assert_eq!(price.lines, vec!["グラス￥600", "ボトル￥2,970"]);
    }

    #[test]
    fn test_volume_unit_not_tagged_single() {
        let price = format_price("瓶ビール 500ml 650", Lang::Jp);
        assert_eq!(price.lines, vec!["瓶ビール 500ml ￥650"]);
    }

    #[test]
    fn test_volume_unit_not_tagged_multi() {
        // 容量の例外は複数価格側にも同じく適用される
        let price = format_price("グラス180ml 600/ボトル720ml 2,970", Lang::Jp);
        assert_eq!(
            price.lines,
            vec!["グラス180ml ￥600", "ボトル720ml ￥2,970"]
        );
    }

    #[test]
    fn test_volume_unit_with_space() {
        let price = format_price("500 ml 650", Lang::Jp);
        assert_eq!(price.lines, vec!["500 ml ￥650"]);
    }

    #[test]
    fn test_segments_trimmed() {
        let price = format_price(" グラス600 / ボトル2,970 ", Lang::Jp);
        assert_eq!(price.lines, vec!["グラス￥600", "ボトル￥2,970"]);
    }
}
