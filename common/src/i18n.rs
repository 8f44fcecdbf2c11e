//! 言語別の表示文字列
//!
//! カテゴリ名の翻訳辞書と固定UI文字列。辞書に載っていないキーは
//! 原文（シート上の日本語キー）をそのまま表示する。

use crate::lang::Lang;

/// カテゴリ表示名。未収録キーは原文のまま返す。
pub fn category_label(lang: Lang, key: &str) -> &str {
    let translated = match lang {
        // シートのキーが日本語なので原文のまま
        Lang::Jp => None,
        Lang::En => category_label_en(key),
        // 中国語の翻訳辞書は未整備（原文フォールバック）
        Lang::Zh => None,
    };
    translated.unwrap_or(key)
}

fn category_label_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "季節のお料理" => "Seasonal Dishes",
        "うなぎ料理" => "Unagi Dishes",
        "コース料理" => "Course Meals",
        "お料理" => "Dishes",
        "サラダ" => "Salads",
        "ビール" => "Beer",
        "日本酒" => "Sake",
        "焼酎" => "Shochu",
        "ウイスキー" => "Whisky",
        "サワー類" => "Sours",
        "ジャパニーズジン" => "Japanese Gin",
        "ソフトドリンク" => "Soft Drinks",
        "デザート" => "Dessert",
        "その他" => "Others",
        _ => return None,
    })
}

/// 提供形態（グラス/ボトル/ポット）の言語別置換。
/// 固定3語以外の語はそのまま通す。
pub fn translate_serving_terms(lang: Lang, text: &str) -> String {
    match lang {
        Lang::Jp => text.to_string(),
        Lang::En => text
            .replace("グラス", "Glass")
            .replace("ボトル", "Bottle")
            .replace("ポット", "Pot"),
        Lang::Zh => text
            .replace("グラス", "杯")
            .replace("ボトル", "瓶")
            .replace("ポット", "壶"),
    }
}

/// 準備中言語向けの案内文。案内自体が中国語+英語の2行で固定。
pub const UNAVAILABLE_NOTICE: [&str; 2] = [
    "中文菜单正在制作中。",
    "Please check the Japanese or English menu.",
];

/// 固定UI文字列
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    /// ページタイトル
    pub title: &'static str,
    /// サブタイトル
    pub subtitle: &'static str,
    /// テイクアウトバッジ
    pub takeout_badge: &'static str,
    /// メニュー冒頭の注記（税込み表記等）
    pub footer_note: &'static str,
    /// 読み込み失敗メッセージ
    pub load_error: &'static str,
    /// 読み込み中表示
    pub loading: &'static str,
}

/// 言語に対応する固定UI文字列を返す
pub const fn ui_text(lang: Lang) -> &'static UiText {
    match lang {
        Lang::Jp => &UI_JP,
        Lang::En => &UI_EN,
        Lang::Zh => &UI_ZH,
    }
}

const UI_JP: UiText = UiText {
    title: "いちのや料理メニュー",
    subtitle: "うなぎ料理専門店",
    takeout_badge: "テイクアウト可",
    footer_note: "※ 表示価格は税込みです。写真はイメージです。ご飯大盛りは160円です。",
    load_error: "メニューの読み込みに失敗しました。",
    loading: "読み込み中…",
};

const UI_EN: UiText = UiText {
    title: "Ichinoya Menu",
    subtitle: "Unagi Restaurant Menu",
    takeout_badge: "Takeout OK",
    footer_note: "※ Prices include tax. Photos are for illustration only. Large rice +¥160.",
    load_error: "Failed to load the menu.",
    loading: "Loading…",
};

const UI_ZH: UiText = UiText {
    title: "一之屋 菜单",
    subtitle: "鳗鱼料理专门店",
    takeout_badge: "可外带",
    footer_note: "※ 价格含税，图片仅供参考。加大饭需加160日元。",
    load_error: "菜单加载失败。",
    loading: "加载中…",
};
