//! カテゴリの表示順

/// タブの正準表示順（メニュー構成順）
pub const CATEGORY_ORDER: [&str; 13] = [
    "季節のお料理",
    "うなぎ料理",
    "コース料理",
    "お料理",
    "サラダ",
    "ビール",
    "日本酒",
    "焼酎",
    "ウイスキー",
    "サワー類",
    "ジャパニーズジン",
    "ソフトドリンク",
    "デザート",
];

/// 出現カテゴリを正準順に並べる。正準リストにないカテゴリは
/// 出現順のまま末尾に付ける。
pub fn ordered_categories(present: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = CATEGORY_ORDER
        .iter()
        .filter(|canonical| present.iter().any(|p| p == *canonical))
        .map(|canonical| canonical.to_string())
        .collect();
    ordered.extend(
        present
            .iter()
            .filter(|p| !CATEGORY_ORDER.contains(&p.as_str()))
            .cloned(),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_canonical_order() {
        // 入力の並びに関係なく正準順になる
        let present = strings(&["デザート", "うなぎ料理"]);
        assert_eq!(
            ordered_categories(&present),
            strings(&["うなぎ料理", "デザート"])
        );

        let present = strings(&["うなぎ料理", "デザート"]);
        assert_eq!(
            ordered_categories(&present),
            strings(&["うなぎ料理", "デザート"])
        );
    }

    #[test]
    fn test_unknown_appended_in_discovery_order() {
        let present = strings(&["限定メニュー", "ビール", "おつまみ"]);
        assert_eq!(
            ordered_categories(&present),
            strings(&["ビール", "限定メニュー", "おつまみ"])
        );
    }

    #[test]
    fn test_empty_category_kept() {
        // 未分類（空文字列）も出現カテゴリとして末尾に残る
        let present = strings(&["ビール", ""]);
        assert_eq!(ordered_categories(&present), strings(&["ビール", ""]));
    }

    #[test]
    fn test_empty_input() {
        assert!(ordered_categories(&[]).is_empty());
    }
}
