//! Discofeed CLI — render a GitHub Discussions music feed
//!
//! Loads saved settings, overlays command-line flags, fetches the feed once
//! (or repeatedly with --watch) and writes rendered HTML or plain text.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use discofeed::audio::LinkMatcher;
use discofeed_app::app::FeedController;
use discofeed_app::data::Settings;
use discofeed_app::feed::render;
use discofeed_app::providers::{FeedProvider, GithubDiscussionsProvider, Post};

#[derive(Parser)]
#[command(name = "discofeed", about = "GitHub Discussions music feed", version)]
struct Cli {
    /// Repository owner (user or organization)
    owner: Option<String>,

    /// Repository name
    repo: Option<String>,

    /// Discussion category ID scoping the feed
    #[arg(long)]
    category_id: Option<String>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Number of posts to fetch
    #[arg(long)]
    limit: Option<u32>,

    /// Prefix prepended to the GraphQL endpoint URL (proxy routing)
    #[arg(long)]
    endpoint_prefix: Option<String>,

    /// Comma-separated platform IDs to embed (soundcloud, youtube, spotify, bandcamp, audio-file)
    #[arg(long, value_delimiter = ',')]
    platforms: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Keep refreshing at the configured interval, rewriting --output
    #[arg(long, requires = "output")]
    watch: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Html,
    Text,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Saved settings are the base; flags overlay them
    let mut settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    apply_flags(&mut settings, &cli);

    if !settings.has_repository() {
        eprintln!("Error: no repository configured (pass OWNER REPO)");
        std::process::exit(2);
    }

    let matcher = LinkMatcher::with_platforms(&settings.platforms());

    let provider = match GithubDiscussionsProvider::from_settings(&settings) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.watch {
        watch(provider, &matcher, &settings, &cli);
    } else {
        run_once(&provider, &matcher, &settings, &cli);
    }
}

fn apply_flags(settings: &mut Settings, cli: &Cli) {
    if let Some(owner) = &cli.owner {
        settings.owner = owner.clone();
    }
    if let Some(repo) = &cli.repo {
        settings.repo = repo.clone();
    }
    if let Some(category_id) = &cli.category_id {
        settings.category_id = Some(category_id.clone());
    }
    if let Some(token) = &cli.token {
        settings.token = Some(token.clone());
    }
    if let Some(limit) = cli.limit {
        settings.feed_limit = limit;
    }
    if let Some(prefix) = &cli.endpoint_prefix {
        settings.endpoint_prefix = Some(prefix.clone());
    }
    if !cli.platforms.is_empty() {
        settings.enabled_platforms = cli.platforms.clone();
    }
}

/// Single fetch-and-render pass
fn run_once(provider: &dyn FeedProvider, matcher: &LinkMatcher, settings: &Settings, cli: &Cli) {
    let posts = match provider.fetch(settings.feed_limit) {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let rendered = render_output(&posts, matcher, settings, cli);
    if let Err(e) = write_output(&rendered, cli.output.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Refresh loop: re-fetch at the configured interval and rewrite the output
/// file. A tick that arrives while a fetch is still running is dropped by
/// the controller's single-flight guard.
fn watch(
    provider: GithubDiscussionsProvider,
    matcher: &LinkMatcher,
    settings: &Settings,
    cli: &Cli,
) {
    let controller = Arc::new(FeedController::new(Box::new(provider), settings.feed_limit));
    let snapshot = controller.snapshot();
    let interval = Duration::from_secs(settings.refresh_interval_secs.max(1));

    loop {
        if controller.refresh() {
            let state = snapshot.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(err) = &state.last_error {
                eprintln!("Refresh failed: {err}");
            }
            let rendered = render_output(&state.posts, matcher, settings, cli);
            drop(state);
            if let Err(e) = write_output(&rendered, cli.output.as_deref()) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        std::thread::sleep(interval);
    }
}

fn render_output(posts: &[Post], matcher: &LinkMatcher, settings: &Settings, cli: &Cli) -> String {
    match cli.format {
        Format::Html => render::render_page(
            posts,
            matcher,
            settings,
            &format!("{}/{}", settings.owner, settings.repo),
        ),
        Format::Text => render_text(posts, matcher),
    }
}

/// Plain-text rendering: author, title, and the first detected audio link
fn render_text(posts: &[Post], matcher: &LinkMatcher) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(&format!("@{}  {}\n", post.author, post.created_at));
        if !post.title.is_empty() {
            out.push_str(&format!("  {}\n", post.title));
        }
        if let Some(m) = matcher.first_match(&post.body) {
            out.push_str(&format!("  [{}] {}\n", m.platform.name(), m.url));
        }
        out.push_str(&format!(
            "  {} comments, {} reactions  {}\n\n",
            post.comment_count, post.reaction_count, post.url
        ));
    }
    out
}

fn write_output(rendered: &str, output: Option<&std::path::Path>) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}
