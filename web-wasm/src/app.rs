//! メインアプリケーションコンポーネント
//!
//! コントローラ(menu-common)をシグナル1つで保持し、取得完了・
//! タブ選択・言語切替のたびに表示を導出し直す。

use leptos::prelude::*;
use menu_common::{parse_menu_csv, Lang, MenuController};
use wasm_bindgen_futures::spawn_local;

use crate::api::sheet::{fetch_csv, SHEET_CSV_URL};
use crate::components::{header::Header, menu_list::MenuList, tabs::CategoryTabs};

/// `?lang=...` 形式のクエリ文字列から表示言語を決定する
fn lang_from_search(search: &str) -> Lang {
    let param = web_sys::UrlSearchParams::new_with_str(search)
        .ok()
        .and_then(|params| params.get("lang"));
    Lang::from_param(param.as_deref())
}

/// 現在のURLから表示言語を決定する（不明値・なしは日本語）
fn lang_from_location() -> Lang {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    lang_from_search(&search)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (controller, set_controller) = signal(MenuController::new(lang_from_location()));

    // 読み込み時の1回だけ取得する
    spawn_local(async move {
        match fetch_csv(SHEET_CSV_URL).await {
            Ok(text) => match parse_menu_csv(&text) {
                Ok(rows) => set_controller.update(|c| c.load(rows)),
                Err(_) => set_controller.update(|c| c.fail()),
            },
            Err(_) => set_controller.update(|c| c.fail()),
        }
    });

    let on_select = move |category: String| {
        set_controller.update(|c| c.select_category(&category));
    };
    let on_lang = move |lang: Lang| {
        set_controller.update(|c| c.set_lang(lang));
    };

    view! {
        <div class="container">
            <Header controller=controller on_lang=on_lang />
            <CategoryTabs controller=controller on_select=on_select />
            <MenuList controller=controller />
        </div>
    }
}
