//! Vinyl-Only Finder
//!
//! Lists a Discogs seller's records that were never released digitally.
//! The report goes to stdout, progress and diagnostics to stderr.

use clap::Parser;
use std::time::Duration;
use vinyl_only_finder::config::{default_user_agent, DEFAULT_BASE_URL, MAX_PER_PAGE};
use vinyl_only_finder::{FinderConfig, FinderError, VinylOnlyFinder, DEFAULT_DIGITAL_KEYWORDS};

/// Find vinyl records in a Discogs seller's inventory that have no CD or digital version
#[derive(Parser, Debug)]
#[command(name = "vinyl_only_finder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Seller profile URL, e.g. https://www.discogs.com/seller/<name>/profile?format=Vinyl
    url: String,

    /// Discogs personal access token (raises the rate limit)
    #[arg(long, env = "DISCOGS_API_KEY", hide_env_values = true)]
    token: Option<String>,

    /// User-Agent sent with every request
    #[arg(long, env = "DISCOGS_USER_AGENT")]
    user_agent: Option<String>,

    /// Discogs API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Minimum delay between API requests in milliseconds
    #[arg(long, default_value_t = 1100)]
    delay_ms: u64,

    /// Listings requested per inventory page (max 100)
    #[arg(long, default_value_t = MAX_PER_PAGE)]
    per_page: u32,

    /// Digital format keyword; repeat to replace the default list
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Only report releases tagged with this genre (e.g. Electronic)
    #[arg(long)]
    genre: Option<String>,

    /// Skip releases that are not themselves on vinyl (e.g. the seller filed a cassette)
    #[arg(long)]
    require_vinyl: bool,
}

impl Args {
    fn into_config(self) -> FinderConfig {
        let digital_keywords = if self.keywords.is_empty() {
            DEFAULT_DIGITAL_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            self.keywords
        };

        FinderConfig {
            user_agent: self
                .user_agent
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(default_user_agent),
            api_token: self.token,
            base_url: self.base_url,
            request_interval: Duration::from_millis(self.delay_ms),
            per_page: self.per_page,
            digital_keywords,
            genre: self.genre,
            require_vinyl: self.require_vinyl,
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug for request pacing
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), FinderError> {
    let url = args.url.clone();
    // Reject a bad URL before any client setup or network traffic
    vinyl_only_finder::parse_seller_url(&url)?;

    let config = args.into_config();
    log::info!("Digital keywords: {}", config.digital_keywords.join(", "));
    if !config.is_authenticated() {
        log::info!("No API token set, using the unauthenticated rate limit");
    }

    let finder = VinylOnlyFinder::new(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = finder.report_to(&url, &mut out)?;

    log::info!(
        "Total: {} fetched, {} inspected, {} skipped, {} vinyl-only",
        summary.fetched,
        summary.inspected,
        summary.skipped.len(),
        summary.vinyl_only
    );
    if config.genre.is_some() {
        log::info!("{} releases did not match the genre filter", summary.genre_mismatches);
    }
    if config.require_vinyl {
        log::info!("{} releases were not on vinyl", summary.not_vinyl);
    }
    Ok(())
}
