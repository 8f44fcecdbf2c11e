//! ヘッダーコンポーネント（タイトルと言語切替）

use leptos::prelude::*;
use menu_common::{Lang, MenuController};

#[component]
pub fn Header<F>(controller: ReadSignal<MenuController>, on_lang: F) -> impl IntoView
where
    F: Fn(Lang) + 'static + Clone + Send,
{
    view! {
        <header id="header" class="header">
            <h1>
                {move || controller.get().text().title}
                <br/>
                <span class="en">{move || controller.get().text().subtitle}</span>
            </h1>
            <nav class="lang-switch">
                {Lang::ALL
                    .into_iter()
                    .map(|lang| {
                        let on_lang = on_lang.clone();
                        view! {
                            <button
                                class="lang"
                                class:active=move || controller.get().lang() == lang
                                on:click=move |_| on_lang(lang)
                            >
                                {lang.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
