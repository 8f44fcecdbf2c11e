//! メニュー表示の状態管理
//!
//! 読み込んだ行・現在言語・現在カテゴリをコントローラ1つで所有し、
//! タブやカード等の表示内容を純粋に導出する。状態が変わるのは
//! 取得完了・取得失敗・タブ選択・言語切替の4操作だけ。

use crate::card::{build_card, CardView};
use crate::category::ordered_categories;
use crate::i18n::{category_label, ui_text, UiText};
use crate::lang::Lang;
use crate::row::MenuRow;
use serde::Serialize;

/// 読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// 取得中
    Loading,
    /// 表示可能
    Ready,
    /// 現在言語のメニューは準備中
    Unavailable,
    /// 取得失敗
    Failed,
}

/// カテゴリタブ1つ分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    /// カテゴリキー（シート上の値）
    pub key: String,
    /// 表示名（翻訳済み、未収録キーは原文）
    pub label: String,
    /// 現在選択中か
    pub active: bool,
}

/// セッション中のUI状態を所有するコントローラ
#[derive(Debug, Clone)]
pub struct MenuController {
    lang: Lang,
    state: MenuState,
    /// 可視行のみ（読み込み時に一度だけ絞り込む）
    rows: Vec<MenuRow>,
    /// 出現カテゴリ（正準順）
    categories: Vec<String>,
    current_category: String,
}

impl MenuController {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            state: MenuState::Loading,
            rows: Vec::new(),
            categories: Vec::new(),
            current_category: String::new(),
        }
    }

    /// 取得完了時の処理。可視行の絞り込み、カテゴリ計算、先頭カテゴリの
    /// 選択を行う。現在言語が準備中なら案内表示の状態に入る。
    pub fn load(&mut self, rows: Vec<MenuRow>) {
        self.rows = rows.into_iter().filter(|r| r.is_visible()).collect();

        let mut present: Vec<String> = Vec::new();
        for row in &self.rows {
            let category = row.category().to_string();
            if !present.contains(&category) {
                present.push(category);
            }
        }
        self.categories = ordered_categories(&present);
        self.current_category = self.categories.first().cloned().unwrap_or_default();

        self.state = if self.lang.is_available() {
            MenuState::Ready
        } else {
            MenuState::Unavailable
        };
    }

    /// 取得失敗。固定メッセージの表示状態に入る。
    pub fn fail(&mut self) {
        self.state = MenuState::Failed;
    }

    /// タブ選択
    pub fn select_category(&mut self, category: &str) {
        self.current_category = category.to_string();
    }

    /// 言語切替。データの再取得はしない。
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        if matches!(self.state, MenuState::Ready | MenuState::Unavailable) {
            self.state = if lang.is_available() {
                MenuState::Ready
            } else {
                MenuState::Unavailable
            };
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn current_category(&self) -> &str {
        &self.current_category
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// 現在言語の固定UI文字列
    pub fn text(&self) -> &'static UiText {
        ui_text(self.lang)
    }

    /// タブ一覧（正準順）。現在カテゴリだけがactive。
    /// 表示可能状態以外ではタブは出さない。
    pub fn tabs(&self) -> Vec<Tab> {
        if self.state != MenuState::Ready {
            return Vec::new();
        }
        self.categories
            .iter()
            .map(|key| Tab {
                key: key.clone(),
                label: category_label(self.lang, key).to_string(),
                active: *key == self.current_category,
            })
            .collect()
    }

    /// 現在カテゴリのカード一覧
    pub fn cards(&self) -> Vec<CardView> {
        if self.state != MenuState::Ready {
            return Vec::new();
        }
        self.rows
            .iter()
            .filter(|row| row.category() == self.current_category)
            .map(|row| build_card(row, self.lang))
            .collect()
    }
}
