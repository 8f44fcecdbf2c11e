//! いちのや料理メニュー 共通ライブラリ
//!
//! CLIとWeb(WASM)で共有されるメニュー表示ロジック:
//! 行アクセス、カテゴリ解決、価格整形、言語別表示、カード描画、状態管理

pub mod card;
pub mod category;
pub mod controller;
pub mod error;
pub mod html;
pub mod i18n;
pub mod lang;
pub mod price;
pub mod row;
pub mod sheet;

pub use card::{build_card, CardView};
pub use category::ordered_categories;
pub use controller::{MenuController, MenuState, Tab};
pub use error::{Error, Result};
pub use i18n::{category_label, ui_text, UiText};
pub use lang::Lang;
pub use price::{format_price, PriceText};
pub use row::MenuRow;
pub use sheet::parse_menu_csv;
