//! メニュー一覧コンポーネント
//!
//! 状態に応じて本文領域を切り替える:
//! 読み込み中 / 取得失敗 / 準備中の案内 / 注記+カード一覧

use leptos::prelude::*;
use menu_common::i18n::UNAVAILABLE_NOTICE;
use menu_common::{CardView, MenuController, MenuState};

#[component]
pub fn MenuList(controller: ReadSignal<MenuController>) -> impl IntoView {
    view! {
        <div id="menu" class="menu">
            {move || {
                let c = controller.get();
                match c.state() {
                    MenuState::Loading => {
                        view! { <p class="loading">{c.text().loading}</p> }.into_any()
                    }
                    MenuState::Failed => {
                        view! { <p class="error">{c.text().load_error}</p> }.into_any()
                    }
                    MenuState::Unavailable => {
                        view! {
                            <div class="note unavailable">
                                <p>{UNAVAILABLE_NOTICE[0]}</p>
                                <p>{UNAVAILABLE_NOTICE[1]}</p>
                            </div>
                        }
                            .into_any()
                    }
                    MenuState::Ready => {
                        if c.categories().is_empty() {
                            // 可視カテゴリなし: 何も描画しない
                            ().into_any()
                        } else {
                            let cards = c.cards();
                            view! {
                                <div class="note">{c.text().footer_note}</div>
                                {cards
                                    .into_iter()
                                    .map(|card| view! { <MenuCard card=card /> })
                                    .collect_view()}
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn MenuCard(card: CardView) -> impl IntoView {
    let cat_label = (!card.category_label.is_empty()).then(|| match &card.sub_label {
        Some(sub) => format!("{} - {}", card.category_label, sub),
        None => card.category_label.clone(),
    });

    let image = card.image_url.clone().map(|url| {
        let alt = card.image_alt.clone();
        view! { <img src=url alt=alt /> }
    });

    let price = if card.price.grouped {
        card.price
            .lines
            .iter()
            .map(|line| view! { <div class="price">{line.clone()}</div> })
            .collect_view()
            .into_any()
    } else {
        card.price
            .lines
            .first()
            .map(|line| view! { <p class="price">{line.clone()}</p> })
            .into_any()
    };

    view! {
        <div class="menu-item">
            <div class="menu-img">{image}</div>
            <div class="menu-text">
                {cat_label.map(|label| view! { <div class="cat">{label}</div> })}
                <h2>{card.title.clone()}</h2>
                {card.jp_sub.clone().map(|jp| view! { <div class="jp-sub">{jp}</div> })}
                {card
                    .takeout_badge
                    .clone()
                    .map(|badge| view! { <span class="takeout-badge">{badge}</span> })}
                <p>{card.description.clone()}</p>
                {card.note.clone().map(|note| view! { <p class="note-sub">{note}</p> })}
                {price}
            </div>
        </div>
    }
}
