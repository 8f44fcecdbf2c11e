//! メニューカードのビューモデル
//!
//! 行と言語から1品分の表示内容を組み立てる純粋な変換。
//! 描画（HTML化・Leptosコンポーネント）はこの結果を使う。

use crate::i18n::{category_label, ui_text};
use crate::lang::Lang;
use crate::price::{format_price, PriceText};
use crate::row::MenuRow;
use serde::Serialize;

/// 1品分の表示内容
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardView {
    /// カテゴリ表示名（翻訳済み）。未分類なら空でラベルごと省略。
    pub category_label: String,
    /// 副カテゴリ。主カテゴリと異なる場合のみ " - " 付きで表示。
    pub sub_label: Option<String>,
    /// 品名（現在言語）。訳が未入力なら空のまま。
    pub title: String,
    /// 日本語名の併記。現在言語が日本語以外で日本語名がある場合のみ。
    pub jp_sub: Option<String>,
    /// テイクアウトバッジ（翻訳済み）
    pub takeout_badge: Option<String>,
    /// 説明文（現在言語）
    pub description: String,
    /// 備考（日本語表示時のみ）
    pub note: Option<String>,
    /// 画像URL
    pub image_url: Option<String>,
    /// 画像の代替テキスト（英語名→日本語名の順）
    pub image_alt: String,
    /// 整形済み価格
    pub price: PriceText,
}

/// 行と言語からカード表示内容を組み立てる
pub fn build_card(row: &MenuRow, lang: Lang) -> CardView {
    let cat = row.category();
    let sub = row.sub_category();
    let jp_name = row.name(Lang::Jp);
    let en_name = row.name(Lang::En);

    let category_label = if cat.is_empty() {
        String::new()
    } else {
        category_label(lang, cat).to_string()
    };
    let sub_label = (!cat.is_empty() && !sub.is_empty() && sub != cat)
        .then(|| sub.to_string());

    let jp_sub = (lang != Lang::Jp && !jp_name.is_empty()).then(|| jp_name.to_string());
    let takeout_badge = row
        .takeout_ok()
        .then(|| ui_text(lang).takeout_badge.to_string());
    let note = (lang == Lang::Jp && !row.note_jp().is_empty())
        .then(|| row.note_jp().to_string());

    let image_url = (!row.image_url().is_empty()).then(|| row.image_url().to_string());
    let image_alt = if !en_name.is_empty() { en_name } else { jp_name }.to_string();

    CardView {
        category_label,
        sub_label,
        title: row.name(lang).to_string(),
        jp_sub,
        takeout_badge,
        description: row.description(lang).to_string(),
        note,
        image_url,
        image_alt,
        price: format_price(row.price(), lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer_row() -> MenuRow {
        MenuRow::from_pairs(&[
            ("Group", "ビール"),
            ("Category", "ビール"),
            ("Name (JP)", "缶ビール"),
            ("Name (EN)", "Canned Beer"),
            ("Description (JP)", "よく冷えています"),
            ("Description (EN)", "Well chilled"),
            ("Price", "500"),
            ("Takeout", "OK"),
        ])
    }

    #[test]
    fn test_card_jp() {
        let card = build_card(&beer_row(), Lang::Jp);
        assert_eq!(card.category_label, "ビール");
        assert_eq!(card.sub_label, None);
        assert_eq!(card.title, "缶ビール");
        assert_eq!(card.jp_sub, None);
        assert_eq!(card.description, "よく冷えています");
        assert_eq!(card.takeout_badge.as_deref(), Some("テイクアウト可"));
        assert_eq!(card.price.lines, vec!["￥500"]);
    }

    #[test]
    fn test_card_en_has_jp_subline() {
        let card = build_card(&beer_row(), Lang::En);
        assert_eq!(card.category_label, "Beer");
        assert_eq!(card.title, "Canned Beer");
        assert_eq!(card.jp_sub.as_deref(), Some("缶ビール"));
        assert_eq!(card.takeout_badge.as_deref(), Some("Takeout OK"));
    }

    #[test]
    fn test_card_no_cross_lang_fallback() {
        // 中国語訳が未入力ならタイトルは空のまま
        let card = build_card(&beer_row(), Lang::Zh);
        assert_eq!(card.title, "");
        assert_eq!(card.jp_sub.as_deref(), Some("缶ビール"));
    }

    #[test]
    fn test_sub_label_only_when_distinct() {
        let row = MenuRow::from_pairs(&[
            ("Group", "うなぎ料理"),
            ("Category", "うな重"),
            ("Name (JP)", "うな重 松"),
        ]);
        let card = build_card(&row, Lang::Jp);
        assert_eq!(card.category_label, "うなぎ料理");
        assert_eq!(card.sub_label.as_deref(), Some("うな重"));
    }

    #[test]
    fn test_ungrouped_row_has_no_category_label() {
        let row = MenuRow::from_pairs(&[("Name (JP)", "お冷や")]);
        let card = build_card(&row, Lang::Jp);
        assert_eq!(card.category_label, "");
        assert_eq!(card.sub_label, None);
    }

    #[test]
    fn test_note_only_in_jp() {
        let row = MenuRow::from_pairs(&[
            ("Name (JP)", "うな重"),
            ("Note (JP)", "肝吸い付き"),
        ]);
        assert_eq!(
            build_card(&row, Lang::Jp).note.as_deref(),
            Some("肝吸い付き")
        );
        assert_eq!(build_card(&row, Lang::En).note, None);
    }

    #[test]
    fn test_image_and_alt() {
        let row = MenuRow::from_pairs(&[
            ("Name (JP)", "うな重"),
            ("Image URL", "https://example.com/unaju.jpg"),
        ]);
        let card = build_card(&row, Lang::Jp);
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://example.com/unaju.jpg")
        );
        // 英語名がなければ日本語名を代替テキストに使う
        assert_eq!(card.image_alt, "うな重");

        let row = MenuRow::from_pairs(&[("Name (JP)", "うな重")]);
        assert_eq!(build_card(&row, Lang::Jp).image_url, None);
    }

    #[test]
    fn test_no_badge_without_takeout() {
        let row = MenuRow::from_pairs(&[("Name (JP)", "うな重")]);
        assert_eq!(build_card(&row, Lang::Jp).takeout_badge, None);
    }
}
