//! カテゴリタブコンポーネント

use leptos::prelude::*;
use menu_common::MenuController;

#[component]
pub fn CategoryTabs<F>(controller: ReadSignal<MenuController>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div id="tabs" class="tabs">
            <For
                each=move || controller.get().tabs()
                key=|tab| (tab.key.clone(), tab.label.clone(), tab.active)
                children=move |tab| {
                    let on_select = on_select.clone();
                    let key = tab.key.clone();
                    let active = tab.active;
                    view! {
                        <div
                            class="tab"
                            class:active=move || active
                            on:click=move |_| on_select(key.clone())
                        >
                            {tab.label.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
