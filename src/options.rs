// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 判定メッセージのみ
    #[default]
    Text,
    /// メッセージ・色・判定結果を JSON で出力
    Json,
}

/// 色付け (ANSI エスケープ) の有無
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    /// 標準出力が端末で、かつ NO_COLOR が未設定のときのみ
    #[default]
    Auto,
    Always,
    Never,
}
