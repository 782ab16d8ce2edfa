use affiliate_reader::{api, cli, config, error, render, runner};
use affiliate_reader_common::Msg;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{ReaderError, Result};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let mut config = Config::load()?;
    if let Some(url) = cli.base_url.clone() {
        config.base_url_override = Some(url);
    }

    match cli.command {
        Commands::Config { set_base_url, show } => {
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.get_base_url().unwrap_or_else(|_| "未設定".into()));
                println!("  デフォルトロゴ: {}", config.loader.default_logo);
                println!("  CTAテンプレート: {}", config.loader.cta_template);
            }
            return Ok(());
        }

        Commands::Browse { path, content } => {
            let mut runner = new_runner(&config)?;
            runner.start(path.as_deref().unwrap_or("/")).await;

            print!("{}", render::render_sidebar(runner.screen()));
            println!();
            print!("{}", render::render_article(runner.screen(), content));
            check_alerts(runner.screen())?;
        }

        Commands::Search { query } => {
            let mut runner = new_runner(&config)?;
            runner.start("/").await;
            runner.send(Msg::SearchFocused).await;
            runner.send(Msg::SearchChanged(query)).await;

            let sidebar = render::render_sidebar(runner.screen());
            if sidebar.is_empty() {
                println!("一致する記事はありません");
            } else {
                print!("{}", sidebar);
            }
        }

        Commands::Open { slug, content } => {
            let mut runner = new_runner(&config)?;
            runner.start("/").await;
            runner.send(Msg::EntryClicked { slug }).await;

            print!("{}", render::render_article(runner.screen(), content));
            check_alerts(runner.screen())?;
        }
    }

    Ok(())
}

fn new_runner(config: &Config) -> Result<runner::Runner<api::HttpSource>> {
    let source = api::HttpSource::new()?;
    Ok(runner::Runner::new(source, config.loader_config()?).with_spinner())
}

/// アラートが出ていれば失敗として終了
fn check_alerts(screen: &runner::Screen) -> Result<()> {
    match screen.alerts.last() {
        Some(message) => Err(ReaderError::ArticleUnavailable(message.clone())),
        None => Ok(()),
    }
}
