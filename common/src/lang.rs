//! 表示言語

use serde::{Deserialize, Serialize};

/// 対応言語（閉集合）
///
/// URLパラメータやCLI引数の不明値は日本語にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Jp,
    En,
    Zh,
}

impl Lang {
    /// 表示順の全言語
    pub const ALL: [Lang; 3] = [Lang::Jp, Lang::En, Lang::Zh];

    /// `?lang=` パラメータ等の文字列から言語を決定する
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("jp") => Lang::Jp,
            Some("en") => Lang::En,
            Some("zh") => Lang::Zh,
            _ => Lang::Jp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Jp => "jp",
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// 言語切替ボタン用の表示名
    pub fn label(&self) -> &'static str {
        match self {
            Lang::Jp => "日本語",
            Lang::En => "English",
            Lang::Zh => "中文",
        }
    }

    /// メニュー内容が公開済みか（中国語は準備中）
    pub fn is_available(&self) -> bool {
        !matches!(self, Lang::Zh)
    }
}
