//! コマンドライン引数

use clap::Parser;
use std::path::PathBuf;

/// 公開スプレッドシートのCSV URL（既定値）
pub const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR7Rdo_eCMQF-HTxCjdZJDx6z8OQnYjc0WTVwuc_N6TNYpdwfFy5DLRmW35gbLZklPcuSGxmmGfafeT/pub?output=csv";

/// メニューCSVから静的HTMLページを生成する
#[derive(Parser, Debug)]
#[command(name = "ichinoya-menu", version, about)]
pub struct Args {
    /// 取得するCSVのURL
    #[arg(long, default_value = DEFAULT_SHEET_CSV_URL)]
    pub url: String,

    /// 表示言語 (jp / en / zh、不明値はjp)
    #[arg(long, default_value = "jp")]
    pub lang: String,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(long)]
    pub out: Option<PathBuf>,
}
