//! メニュー行（スプレッドシートの1レコード）
//!
//! 列名→値のマッピング。列名は前後空白・大文字小文字・連続空白の
//! 揺れを吸収して照合する。欠けている列は一律空文字列になる。

use crate::lang::Lang;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 列名の正規化: 前後空白を除去し、小文字化し、連続空白を1つにまとめる
fn normalize_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.trim().chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.extend(c.to_lowercase());
            prev_space = false;
        }
    }
    out
}

/// スプレッドシートの1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuRow {
    fields: HashMap<String, String>,
}

impl MenuRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト・固定データ用の簡易コンストラクタ
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    /// 列を追加する。キーは正規化、値は前後空白を除去して保持する。
    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields
            .insert(normalize_key(key), value.trim().to_string());
    }

    /// 論理列名で値を引く。列がなければ空文字列。
    pub fn get(&self, wanted: &str) -> &str {
        self.fields
            .get(&normalize_key(wanted))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 主カテゴリ（Group優先、なければCategory）
    pub fn category(&self) -> &str {
        let group = self.get("Group");
        if !group.is_empty() {
            group
        } else {
            self.get("Category")
        }
    }

    /// 副カテゴリ（Category列そのもの）
    pub fn sub_category(&self) -> &str {
        self.get("Category")
    }

    pub fn name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Jp => self.get("Name (JP)"),
            Lang::En => self.get("Name (EN)"),
            Lang::Zh => self.get("Name (ZH)"),
        }
    }

    pub fn description(&self, lang: Lang) -> &str {
        match lang {
            Lang::Jp => self.get("Description (JP)"),
            Lang::En => self.get("Description (EN)"),
            Lang::Zh => self.get("Description (ZH)"),
        }
    }

    /// 備考欄（日本語のみの自由記述）
    pub fn note_jp(&self) -> &str {
        self.get("Note (JP)")
    }

    pub fn price(&self) -> &str {
        self.get("Price")
    }

    pub fn image_url(&self) -> &str {
        self.get("Image URL")
    }

    /// テイクアウト可か（"ok" を含むかどうか、大文字小文字無視）
    pub fn takeout_ok(&self) -> bool {
        self.get("Takeout").to_lowercase().contains("ok")
    }

    /// 表示対象か。×/✗/x/no/0/false のいずれか（大文字小文字無視）で非表示。
    /// それ以外の値・列なしは表示扱い。
    pub fn is_visible(&self) -> bool {
        let value = self.get("Visible").to_lowercase();
        !matches!(
            value.as_str(),
            "×" | "✗" | "x" | "no" | "0" | "false"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_exact_key() {
        let row = MenuRow::from_pairs(&[("Name (JP)", "缶ビール")]);
        assert_eq!(row.get("Name (JP)"), "缶ビール");
    }

    #[test]
    fn test_get_header_variants() {
        // 大文字小文字・前後空白・連続空白の揺れはすべて同じ列に解決される
        let row = MenuRow::from_pairs(&[("  name   (jp) ", "うな重")]);
        assert_eq!(row.get("Name (JP)"), "うな重");
        assert_eq!(row.get("NAME (JP)"), "うな重");
        assert_eq!(row.get("name (jp)"), "うな重");
    }

    #[test]
    fn test_get_missing_is_empty() {
        let row = MenuRow::from_pairs(&[("Name (JP)", "うな重")]);
        assert_eq!(row.get("Price"), "");
        assert_eq!(row.get("存在しない列"), "");
    }

    #[test]
    fn test_value_is_trimmed() {
        let row = MenuRow::from_pairs(&[("Price", "  730  ")]);
        assert_eq!(row.price(), "730");
    }

    #[test]
    fn test_category_prefers_group() {
        let row = MenuRow::from_pairs(&[("Group", "A"), ("Category", "B")]);
        assert_eq!(row.category(), "A");
        assert_eq!(row.sub_category(), "B");
    }

    #[test]
    fn test_category_falls_back() {
        let row = MenuRow::from_pairs(&[("Group", ""), ("Category", "B")]);
        assert_eq!(row.category(), "B");

        let row = MenuRow::from_pairs(&[("Group", ""), ("Category", "")]);
        assert_eq!(row.category(), "");
    }

    #[test]
    fn test_visibility_hidden_tokens() {
        for token in ["×", "✗", "x", "X", "no", "No", "NO", "0", "false", "FALSE"] {
            let row = MenuRow::from_pairs(&[("Visible", token)]);
            assert!(!row.is_visible(), "{token} は非表示のはず");
        }
    }

    #[test]
    fn test_visibility_visible_tokens() {
        for token in ["1", "yes", "", "○", "ok"] {
            let row = MenuRow::from_pairs(&[("Visible", token)]);
            assert!(row.is_visible(), "{token} は表示のはず");
        }
        // 列自体がない場合も表示
        assert!(MenuRow::new().is_visible());
    }

    #[test]
    fn test_takeout_ok() {
        assert!(MenuRow::from_pairs(&[("Takeout", "OK")]).takeout_ok());
        assert!(MenuRow::from_pairs(&[("Takeout", "ok")]).takeout_ok());
        assert!(!MenuRow::from_pairs(&[("Takeout", "不可")]).takeout_ok());
        assert!(!MenuRow::from_pairs(&[("Takeout", "")]).takeout_ok());
    }

    #[test]
    fn test_name_per_lang() {
        let row = MenuRow::from_pairs(&[
            ("Name (JP)", "缶ビール"),
            ("Name (EN)", "Canned Beer"),
        ]);
        assert_eq!(row.name(Lang::Jp), "缶ビール");
        assert_eq!(row.name(Lang::En), "Canned Beer");
        // 中国語訳の未入力は空のまま（他言語へのフォールバックはしない）
        assert_eq!(row.name(Lang::Zh), "");
    }
}
