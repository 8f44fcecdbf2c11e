//! メニューCSVを取得して静的HTMLを生成するCLI
//!
//! シート編集後の見た目確認用。Webページ(web-wasm)と同じ
//! 共通ロジックで描画する。

mod cli;

use anyhow::Context;
use clap::Parser;
use menu_common::{html, parse_menu_csv, Lang, MenuController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let lang = Lang::from_param(Some(args.lang.as_str()));

    let response = reqwest::get(&args.url)
        .await
        .context("CSVの取得に失敗しました")?
        .error_for_status()
        .context("CSVの取得に失敗しました")?;
    let body = response
        .text()
        .await
        .context("CSVの読み取りに失敗しました")?;

    let mut controller = MenuController::new(lang);
    match parse_menu_csv(&body) {
        Ok(rows) => controller.load(rows),
        // パースできないフィードもページ上はエラー表示として扱う
        Err(_) => controller.fail(),
    }

    let page = html::page_html(&controller);
    match args.out {
        Some(path) => std::fs::write(&path, page)
            .with_context(|| format!("{} に書き込めませんでした", path.display()))?,
        None => print!("{page}"),
    }
    Ok(())
}
