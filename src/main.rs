use anyhow::{Context, Result};
use clap::Parser;
use project_feed::config::Config;
use project_feed::engine::{CancelToken, FeedController, FilterKind, PageView};
use project_feed::feed::rest::HttpProjectStore;
use project_feed::feed::types::ProjectSource;
use project_feed::session::Session;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Browse the project showcase feed from the terminal.
#[derive(Debug, Parser)]
#[command(name = "project-feed", version)]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, env = "PROJECT_FEED_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Keep projects whose title or description contains this text.
    #[arg(long)]
    search: Option<String>,

    /// Keep projects with a tag containing this value.
    #[arg(long)]
    tag: Option<String>,

    /// Page to show (clamped to the available range).
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// List only the signed-in user's projects (needs PROJECT_FEED_UID).
    #[arg(long)]
    mine: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("project_feed=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    // Session variables may live in .env (real env vars take precedence)
    Config::load_env_file();
    let source = if args.mine {
        let session = Session::from_env()
            .context("--mine needs a signed-in session (set PROJECT_FEED_UID)")?;
        ProjectSource::mine(&session)
    } else {
        ProjectSource::All
    };

    let store = HttpProjectStore::new(&config.api, source)?;
    let mut feed = FeedController::new(Arc::new(store), config.feed.page_size, CancelToken::new());

    feed.on_mount()
        .await
        .context("failed to load projects")?;

    if let Some(search) = args.search {
        feed.set_search_text(search);
    }
    if let Some(tag) = args.tag {
        feed.set_filter_kind(FilterKind::Tag);
        feed.set_filter_value(tag);
    }
    feed.go_to_page(args.page);

    print_page(&feed.current_view());
    Ok(())
}

fn print_page(view: &PageView) {
    if view.is_empty() {
        println!("No projects found.");
    }
    for p in &view.items {
        println!("{} | {} | {}", p.title, p.description, p.tags.join(", "));
    }
    println!();
    println!("{}", view);
}
