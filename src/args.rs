// src/args.rs
use clap::{ArgAction, Parser};

use crate::options::{ColorChoice, OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "range_match",
    version = crate::VERSION,
    about = "パスワードが数値範囲 [START, END] のいずれかの値と一致するかを判定します",
    long_about = "パスワードが数値範囲 [START, END] のいずれかの値と一致するかを判定します。\n\
                  比較は 10 進表記の文字列同士で行うため、先頭ゼロ付きのパスワード (例: 05) は一致しません。\n\
                  省略したフィールドは標準入力から 1 行ずつ読み込みます。\n\
                  '-' で始まるパスワードは '--' の後に指定します (例: range_match -- -abc 1 10)。\n\n\
                  終了コード: 0 = 一致, 1 = 不一致, 2 = 範囲が不正, 3 = 実行エラー",
    allow_negative_numbers = true
)]
pub struct Args {
    /// 判定するパスワード（省略時は標準入力から読み込み、'-' で始まる場合は '--' の後に指定）
    pub password: Option<String>,

    /// 範囲の開始値（10 進整数）
    pub start: Option<String>,

    /// 範囲の終了値（10 進整数、開始値を含む閉区間）
    pub end: Option<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 色付け
    #[arg(long, value_enum, default_value = "auto", help_heading = "出力")]
    pub color: ColorChoice,

    /// ログ出力を詳細化（-v: info, -vv: debug, -vvv: trace）。RANGE_MATCH_LOG / RUST_LOG が優先
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
