//! HTMLフラグメント生成
//!
//! ビューモデルをHTML文字列にする。CLIの静的ページ生成と
//! テストで使用する。シート由来の文字列はすべてエスケープする。

use crate::card::CardView;
use crate::controller::{MenuController, MenuState, Tab};
use crate::i18n::UNAVAILABLE_NOTICE;
use std::fmt::Write;

/// HTMLエスケープ
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// カード1枚分のフラグメント
pub fn card_html(card: &CardView) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"menu-item\"><div class=\"menu-img\">");
    if let Some(url) = &card.image_url {
        let _ = write!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(url),
            escape_html(&card.image_alt)
        );
    }
    html.push_str("</div><div class=\"menu-text\">");

    if !card.category_label.is_empty() {
        let _ = match &card.sub_label {
            Some(sub) => write!(
                html,
                "<div class=\"cat\">{} - {}</div>",
                escape_html(&card.category_label),
                escape_html(sub)
            ),
            None => write!(
                html,
                "<div class=\"cat\">{}</div>",
                escape_html(&card.category_label)
            ),
        };
    }

    let _ = write!(html, "<h2>{}</h2>", escape_html(&card.title));
    if let Some(jp) = &card.jp_sub {
        let _ = write!(html, "<div class=\"jp-sub\">{}</div>", escape_html(jp));
    }
    if let Some(badge) = &card.takeout_badge {
        let _ = write!(
            html,
            "<span class=\"takeout-badge\">{}</span>",
            escape_html(badge)
        );
    }
    let _ = write!(html, "<p>{}</p>", escape_html(&card.description));
    if let Some(note) = &card.note {
        let _ = write!(html, "<p class=\"note-sub\">{}</p>", escape_html(note));
    }

    if card.price.grouped {
        for line in &card.price.lines {
            let _ = write!(html, "<div class=\"price\">{}</div>", escape_html(line));
        }
    } else if let Some(line) = card.price.lines.first() {
        let _ = write!(html, "<p class=\"price\">{}</p>", escape_html(line));
    }

    html.push_str("</div></div>");
    html
}

/// タブバーのフラグメント
pub fn tabs_html(tabs: &[Tab]) -> String {
    let mut html = String::new();
    for tab in tabs {
        let class = if tab.active { "tab active" } else { "tab" };
        let _ = write!(
            html,
            "<div class=\"{}\" data-category=\"{}\">{}</div>",
            class,
            escape_html(&tab.key),
            escape_html(&tab.label)
        );
    }
    html
}

/// ヘッダー領域のフラグメント
pub fn header_html(controller: &MenuController) -> String {
    let text = controller.text();
    format!(
        "<h1>{}<br><span class=\"en\">{}</span></h1>",
        text.title, text.subtitle
    )
}

/// メニュー領域のフラグメント（状態に応じて注記+カード / 準備中 / エラー）
pub fn menu_html(controller: &MenuController) -> String {
    match controller.state() {
        MenuState::Loading => format!("<p class=\"loading\">{}</p>", controller.text().loading),
        MenuState::Failed => format!("<p class=\"error\">{}</p>", controller.text().load_error),
        MenuState::Unavailable => format!(
            "<div class=\"note unavailable\"><p>{}</p><p>{}</p></div>",
            UNAVAILABLE_NOTICE[0], UNAVAILABLE_NOTICE[1]
        ),
        MenuState::Ready => {
            if controller.categories().is_empty() {
                return String::new();
            }
            let mut html = format!(
                "<div class=\"note\">{}</div>",
                controller.text().footer_note
            );
            for card in controller.cards() {
                html.push_str(&card_html(&card));
            }
            html
        }
    }
}

/// 単独ページ全体（CLIプレビュー用）。タブは静的表示のみ。
pub fn page_html(controller: &MenuController) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n\
         <header id=\"header\">{}</header>\n\
         <div id=\"tabs\" class=\"tabs\">{}</div>\n\
         <div id=\"menu\" class=\"menu\">{}</div>\n\
         </body>\n</html>\n",
        controller.lang().as_str(),
        controller.text().title,
        header_html(controller),
        tabs_html(&controller.tabs()),
        menu_html(controller),
    )
}
