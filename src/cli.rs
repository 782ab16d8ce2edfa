use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "affiliate-reader")]
#[command(about = "アフィリエイト記事サイトの記事ローダー（端末クライアント）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// サイドバーと初期記事を表示（パス省略時はリスト先頭の記事）
    Browse {
        /// 記事パス（例: /best-vpn）
        path: Option<String>,

        /// 記事本文のHTMLも出力
        #[arg(short, long)]
        content: bool,
    },

    /// 全件リストを読み込んでタイトル/抜粋を検索
    Search {
        /// 検索文字列（大文字小文字を区別しない）
        #[arg(required = true)]
        query: String,
    },

    /// サイドバーから記事を選んで表示（クリック相当）
    Open {
        /// 記事スラッグ
        #[arg(required = true)]
        slug: String,

        /// 記事本文のHTMLも出力
        #[arg(short, long)]
        content: bool,
    },

    /// 設定の管理
    Config {
        /// ベースURLを保存
        #[arg(long)]
        set_base_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
